use super::*;

#[test]
fn spatial_config_defaults_test() {
    let config = SpatialConfig::from_args(&OperatorArgs::new().with("kernel", 2)).unwrap();

    assert_eq!(config.get_kernel(), (2, 2));
    assert_eq!(config.get_stride(), (1, 1));
    assert_eq!(config.get_pads(), (0, 0, 0, 0));
    assert_eq!(config.get_padding_policy(), PaddingPolicy::Explicit);
    assert_eq!(config.get_storage_order(), StorageOrder::NCHW);
    assert_eq!(config.get_same_split(), SameSplit::TailExtra);
}

#[test]
fn axis_specific_arguments_override_generic_ones() {
    let args = OperatorArgs::new()
        .with("kernel", 3)
        .with("kernel_w", 5)
        .with("stride", 2)
        .with("stride_h", 3)
        .with("pad", 1)
        .with("pad_t", 0)
        .with("pad_r", 2);
    let config = SpatialConfig::from_args(&args).unwrap();

    assert_eq!(config.get_kernel_h(), 3);
    assert_eq!(config.get_kernel_w(), 5);
    assert_eq!(config.get_stride_h(), 3);
    assert_eq!(config.get_stride_w(), 2);
    assert_eq!(config.get_pad_t(), 0);
    assert_eq!(config.get_pad_l(), 1);
    assert_eq!(config.get_pad_b(), 1);
    assert_eq!(config.get_pad_r(), 2);
    assert_eq!(config.height_pads(), AxisPads::new(0, 1));
    assert_eq!(config.width_pads(), AxisPads::new(1, 2));
}

#[test]
fn kernel_must_be_positive() {
    // no kernel at all
    let result = SpatialConfig::from_args(&OperatorArgs::new());
    assert!(matches!(result, Err(ConvPoolError::ConfigurationError(_))));

    let result = SpatialConfig::from_args(&OperatorArgs::new().with("kernel", 3).with("kernel_w", 0));
    assert!(matches!(result, Err(ConvPoolError::ConfigurationError(_))));

    let result = SpatialConfig::from_args(&OperatorArgs::new().with("kernel", -2));
    assert!(matches!(result, Err(ConvPoolError::ConfigurationError(_))));
}

#[test]
fn stride_must_be_positive_and_within_kernel() {
    let result =
        SpatialConfig::from_args(&OperatorArgs::new().with("kernel", 3).with("stride", 0));
    assert!(matches!(result, Err(ConvPoolError::ConfigurationError(_))));

    let result =
        SpatialConfig::from_args(&OperatorArgs::new().with("kernel", 3).with("stride_h", 4));
    assert!(matches!(result, Err(ConvPoolError::ConfigurationError(_))));

    // stride_w is compared with kernel_w, not kernel_h
    let args = OperatorArgs::new()
        .with("kernel_h", 5)
        .with("kernel_w", 2)
        .with("stride_w", 3);
    let result = SpatialConfig::from_args(&args);
    assert!(matches!(result, Err(ConvPoolError::ConfigurationError(_))));

    let args = OperatorArgs::new()
        .with("kernel_h", 2)
        .with("kernel_w", 5)
        .with("stride_w", 3);
    assert!(SpatialConfig::from_args(&args).is_ok());
}

#[test]
fn pads_must_be_non_negative() {
    let result = SpatialConfig::from_args(&OperatorArgs::new().with("kernel", 3).with("pad", -1));
    assert!(matches!(result, Err(ConvPoolError::ConfigurationError(_))));

    // the generic pad is checked even when every edge is overridden
    let args = OperatorArgs::new()
        .with("kernel", 3)
        .with("pad", -1)
        .with("pad_t", 0)
        .with("pad_l", 0)
        .with("pad_b", 0)
        .with("pad_r", 0);
    assert!(matches!(
        SpatialConfig::from_args(&args),
        Err(ConvPoolError::ConfigurationError(_))
    ));

    let result =
        SpatialConfig::from_args(&OperatorArgs::new().with("kernel", 3).with("pad_b", -3));
    assert!(matches!(result, Err(ConvPoolError::ConfigurationError(_))));
}

#[test]
fn explicit_pads_conflict_with_computed_policies() {
    for policy in ["VALID", "SAME"] {
        for pad in ["pad", "pad_t", "pad_l", "pad_b", "pad_r"] {
            let args = OperatorArgs::new()
                .with("kernel", 3)
                .with("padding_policy", policy)
                .with(pad, 0);
            let result = SpatialConfig::from_args(&args);
            assert!(
                matches!(result, Err(ConvPoolError::ConfigurationError(_))),
                "{} with {} should be rejected",
                policy,
                pad
            );
        }
    }

    // explicit pads are fine for the policies that read them
    for policy in ["NOTSET", "CAFFE_LEGACY_POOLING"] {
        let args = OperatorArgs::new()
            .with("kernel", 3)
            .with("padding_policy", policy)
            .with("pad_t", 1);
        assert!(SpatialConfig::from_args(&args).is_ok());
    }
}

#[test]
fn policy_and_order_aliases() {
    let args = OperatorArgs::new()
        .with("kernel", 3)
        .with("legacy_pad", 3)
        .with("layout", "nhwc");
    let config = SpatialConfig::from_args(&args).unwrap();
    assert_eq!(config.get_padding_policy(), PaddingPolicy::LegacyPoolingCompat);
    assert_eq!(config.get_storage_order(), StorageOrder::NHWC);
}

#[test]
fn unknown_order_is_unsupported_layout() {
    let args = OperatorArgs::new().with("kernel", 3).with("order", "CHWN");
    assert!(matches!(
        SpatialConfig::from_args(&args),
        Err(ConvPoolError::UnsupportedLayout(_))
    ));
}

#[test]
fn wrongly_typed_argument_is_rejected() {
    let args = OperatorArgs::new().with("kernel", "3");
    assert!(matches!(
        SpatialConfig::from_args(&args),
        Err(ConvPoolError::ConfigurationError(_))
    ));
}

#[test]
fn compute_per_axis_uses_axis_parameters() {
    let args = OperatorArgs::new()
        .with("kernel_h", 3)
        .with("kernel_w", 2)
        .with("stride_h", 2)
        .with("pad_t", 1)
        .with("pad_b", 1);
    let config = SpatialConfig::from_args(&args).unwrap();

    // (5 + 1 + 1 - 3) / 2 + 1
    assert_eq!(config.compute_height(5).unwrap().out_size, 3);
    // (5 - 2) / 1 + 1
    assert_eq!(config.compute_width(5).unwrap().out_size, 4);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn large_arguments_convert_without_truncation() {
    let args = OperatorArgs::new()
        .with("kernel", 1i64 << 40)
        .with("stride", 1i64 << 33)
        .with("pad_r", i64::MAX);
    let config = SpatialConfig::from_args(&args).unwrap();

    assert_eq!(config.get_kernel(), (1 << 40, 1 << 40));
    assert_eq!(config.get_stride(), (1 << 33, 1 << 33));
    assert_eq!(config.get_pad_r(), i64::MAX as usize);
}

#[cfg(target_pointer_width = "32")]
#[test]
fn arguments_beyond_the_index_type_are_rejected() {
    let result = SpatialConfig::from_args(&OperatorArgs::new().with("kernel", 1i64 << 40));
    assert!(matches!(result, Err(ConvPoolError::ConfigurationError(_))));

    let result =
        SpatialConfig::from_args(&OperatorArgs::new().with("kernel", 3).with("pad", 1i64 << 33));
    assert!(matches!(result, Err(ConvPoolError::ConfigurationError(_))));
}
