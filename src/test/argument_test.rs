use super::*;

#[test]
fn operator_args_test() {
    let mut args = OperatorArgs::new().with("kernel", 3).with("order", "NHWC");
    args.set("kernel", 5i64);

    assert!(args.has_argument("kernel"));
    assert!(!args.has_argument("stride"));
    assert_eq!(args.get("kernel"), Some(&Argument::Int(5)));
    assert_eq!(args.get_int("kernel", 0).unwrap(), 5);
    assert_eq!(args.get_int("stride", 1).unwrap(), 1);
    assert_eq!(args.get_str("order", "NCHW").unwrap(), "NHWC");
    assert_eq!(args.get_str("layout", "NCHW").unwrap(), "NCHW");
}

#[test]
fn operator_args_type_mismatch() {
    let args = OperatorArgs::new().with("kernel", "big").with("order", 1);

    assert!(matches!(
        args.get_int("kernel", 0),
        Err(ConvPoolError::ConfigurationError(_))
    ));
    assert!(matches!(
        args.get_str("order", "NCHW"),
        Err(ConvPoolError::ConfigurationError(_))
    ));
}
