use structopt::StructOpt;

#[derive(StructOpt, Debug)]
pub struct Opt {
    #[structopt(subcommand)]
    pub cmd: Cmd,
}

#[derive(StructOpt, Debug)]
pub enum Cmd {
    /// Run the sample calculations and print the history.
    Demo,
    /// Evaluate a single operation.
    Eval(cmd::Eval),
    /// Replay all operations of a script file.
    Run(cmd::Run),
}

pub mod cmd {
    use rechner::Operator;
    use std::path::PathBuf;
    use structopt::{clap::AppSettings, StructOpt};

    /// Evaluate `x <op> y`.
    #[derive(StructOpt, Debug)]
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    pub struct Eval {
        /// The left operand.
        pub x: f64,
        /// The operator (`add`, `sub`, `mul`, `div` or `+`, `-`, `x`, `/`).
        pub op: Operator,
        /// The right operand.
        pub y: f64,
    }

    /// Replay a script.
    #[derive(StructOpt, Debug)]
    pub struct Run {
        /// The script to replay (`.toml`, `.yaml` or `.yml`).
        #[structopt(default_value = "./config/script.toml", parse(from_os_str))]
        pub script: PathBuf,
        /// Stop at the first failing operation.
        #[structopt(long)]
        pub fail_fast: bool,
    }
}
