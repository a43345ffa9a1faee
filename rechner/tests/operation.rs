use rechner::{Calculator, Error, Operation, Operator};

#[test]
fn test_parse_operator() {
    for (text, op) in &[
        ("add", Operator::Add),
        ("+", Operator::Add),
        ("subtract", Operator::Subtract),
        ("sub", Operator::Subtract),
        ("-", Operator::Subtract),
        ("multiply", Operator::Multiply),
        ("mul", Operator::Multiply),
        ("x", Operator::Multiply),
        ("*", Operator::Multiply),
        ("divide", Operator::Divide),
        ("div", Operator::Divide),
        ("/", Operator::Divide),
    ] {
        assert_eq!(text.parse::<Operator>(), Ok(*op));
    }

    assert_eq!(
        "modulo".parse::<Operator>(),
        Err(Error::UnknownOperator("modulo".to_string()))
    );
}

#[test]
fn test_apply_dispatches_to_calculator() {
    let _ = pretty_env_logger::try_init();
    let mut calculator = Calculator::new();

    let operations = [
        Operation::new(Operator::Add, 5.0, 3.0),
        Operation::new(Operator::Subtract, 10.0, 4.0),
        Operation::new(Operator::Multiply, 6.0, 7.0),
        Operation::new(Operator::Divide, 15.0, 3.0),
    ];
    let results: Result<Vec<_>, _> = operations
        .iter()
        .map(|operation| operation.apply(&mut calculator))
        .collect();

    assert_eq!(results, Ok(vec![8.0, 6.0, 42.0, 5.0]));
    assert_eq!(
        calculator.history(),
        vec![
            "Added 5.00 + 3.00 = 8.00",
            "Subtracted 10.00 - 4.00 = 6.00",
            "Multiplied 6.00 * 7.00 = 42.00",
            "Divided 15.00 / 3.00 = 5.00",
        ]
    );
}

#[test]
fn test_apply_division_by_zero() {
    let mut calculator = Calculator::new();
    let operation = Operation::new(Operator::Divide, 5.0, 0.0);

    assert_eq!(operation.apply(&mut calculator), Err(Error::DivisionByZero));
    assert!(calculator.is_empty());
}

#[test]
fn test_display() {
    assert_eq!(Operator::Divide.to_string(), "/");
    assert_eq!(
        Operation::new(Operator::Subtract, 10.0, -4.5).to_string(),
        "10 - -4.5"
    );
}
