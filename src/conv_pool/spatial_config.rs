use super::input_validation_function::{
    validate_kernel_2d, validate_no_explicit_pads, validate_pad, validate_strides_2d,
};
use super::*;

/// Validated kernel, stride, pad, padding policy and storage order of a 2D sliding-window operator.
///
/// Everything except the pads is fixed at construction. Pads are refreshed by the
/// operator when the padding policy derives them from the input size.
///
/// # Fields
///
/// - `kernel_h` / `kernel_w` - Window extent per spatial axis
/// - `stride_h` / `stride_w` - Window step per spatial axis
/// - `pad_t` / `pad_b` - Head and tail pad of the height axis
/// - `pad_l` / `pad_r` - Head and tail pad of the width axis
/// - `padding_policy` - How pads and output extents are obtained
/// - `storage_order` - Which input axes are spatial
/// - `same_split` - Which side gets the odd unit under `PaddingPolicy::Same`
///
/// # Examples
/// ```rust
/// use convpool::argument::OperatorArgs;
/// use convpool::conv_pool::{PaddingPolicy, SpatialConfig, StorageOrder};
///
/// let args = OperatorArgs::new()
///     .with("kernel", 3)
///     .with("stride_w", 2)
///     .with("pad", 1)
///     .with("pad_r", 0);
/// let config = SpatialConfig::from_args(&args).unwrap();
///
/// assert_eq!(config.get_kernel(), (3, 3));
/// assert_eq!(config.get_stride(), (1, 2));
/// assert_eq!(config.get_pads(), (1, 1, 1, 0));
/// assert_eq!(config.get_padding_policy(), PaddingPolicy::Explicit);
/// assert_eq!(config.get_storage_order(), StorageOrder::NCHW);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpatialConfig {
    kernel_h: usize,
    kernel_w: usize,
    stride_h: usize,
    stride_w: usize,
    pad_t: usize,
    pad_l: usize,
    pad_b: usize,
    pad_r: usize,
    padding_policy: PaddingPolicy,
    storage_order: StorageOrder,
    same_split: SameSplit,
}

impl SpatialConfig {
    /// Builds a configuration from operator arguments using `DEFAULT_SAME_SPLIT`.
    ///
    /// See [`SpatialConfig::from_args_with_split`].
    pub fn from_args(args: &OperatorArgs) -> Result<Self, ConvPoolError> {
        Self::from_args_with_split(args, DEFAULT_SAME_SPLIT)
    }

    /// Builds a configuration from operator arguments.
    ///
    /// Axis-specific arguments (`kernel_h`, `stride_w`, `pad_t`, ...) take precedence over
    /// the generic ones (`kernel`, `stride`, `pad`). `stride` defaults to 1 and `pad` to 0;
    /// `kernel` has no usable default.
    ///
    /// # Parameters
    ///
    /// - `args` - Operator arguments
    /// - `same_split` - Side receiving the extra unit of odd `Same` padding
    ///
    /// # Returns
    ///
    /// - `Result<SpatialConfig, ConvPoolError>` - Validated configuration on success
    ///
    /// # Errors
    ///
    /// - `ConvPoolError::ConfigurationError` - If a kernel or stride is not positive, a stride
    ///   exceeds the kernel, a pad is negative, an explicit pad accompanies `VALID`/`SAME`,
    ///   an argument has the wrong type or the padding policy is unknown
    /// - `ConvPoolError::UnsupportedLayout` - If the storage order is neither `NCHW` nor `NHWC`
    pub fn from_args_with_split(
        args: &OperatorArgs,
        same_split: SameSplit,
    ) -> Result<Self, ConvPoolError> {
        let padding_policy = match args
            .get("padding_policy")
            .or_else(|| args.get("legacy_pad"))
        {
            Some(value) => PaddingPolicy::from_argument(value)?,
            None => PaddingPolicy::default(),
        };
        let order_key = if args.has_argument("order") {
            "order"
        } else {
            "layout"
        };
        let storage_order = StorageOrder::from_name(args.get_str(order_key, "NCHW")?)?;

        let kernel = args.get_int("kernel", 0)?;
        let kernel = validate_kernel_2d((
            args.get_int("kernel_h", kernel)?,
            args.get_int("kernel_w", kernel)?,
        ))?;

        let stride = args.get_int("stride", 1)?;
        let (stride_h, stride_w) = validate_strides_2d(
            (
                args.get_int("stride_h", stride)?,
                args.get_int("stride_w", stride)?,
            ),
            kernel,
        )?;

        validate_no_explicit_pads(args, padding_policy)?;
        let pad = args.get_int("pad", 0)?;
        validate_pad("pad", pad)?;
        let pad_t = validate_pad("pad_t", args.get_int("pad_t", pad)?)?;
        let pad_l = validate_pad("pad_l", args.get_int("pad_l", pad)?)?;
        let pad_b = validate_pad("pad_b", args.get_int("pad_b", pad)?)?;
        let pad_r = validate_pad("pad_r", args.get_int("pad_r", pad)?)?;

        Ok(SpatialConfig {
            kernel_h: kernel.0,
            kernel_w: kernel.1,
            stride_h,
            stride_w,
            pad_t,
            pad_l,
            pad_b,
            pad_r,
            padding_policy,
            storage_order,
            same_split,
        })
    }

    get_field!(get_kernel_h, kernel_h, usize);
    get_field!(get_kernel_w, kernel_w, usize);
    get_field!(get_stride_h, stride_h, usize);
    get_field!(get_stride_w, stride_w, usize);
    get_field!(get_pad_t, pad_t, usize);
    get_field!(get_pad_l, pad_l, usize);
    get_field!(get_pad_b, pad_b, usize);
    get_field!(get_pad_r, pad_r, usize);
    get_field!(get_padding_policy, padding_policy, PaddingPolicy);
    get_field!(get_storage_order, storage_order, StorageOrder);
    get_field!(get_same_split, same_split, SameSplit);

    /// Kernel extents as (height, width).
    pub fn get_kernel(&self) -> (usize, usize) {
        (self.kernel_h, self.kernel_w)
    }

    /// Strides as (height, width).
    pub fn get_stride(&self) -> (usize, usize) {
        (self.stride_h, self.stride_w)
    }

    /// Pads as (top, left, bottom, right).
    pub fn get_pads(&self) -> (usize, usize, usize, usize) {
        (self.pad_t, self.pad_l, self.pad_b, self.pad_r)
    }

    /// Head and tail pads of the height axis.
    pub fn height_pads(&self) -> AxisPads {
        AxisPads::new(self.pad_t, self.pad_b)
    }

    /// Head and tail pads of the width axis.
    pub fn width_pads(&self) -> AxisPads {
        AxisPads::new(self.pad_l, self.pad_r)
    }

    pub(crate) fn set_height_pads(&mut self, pads: AxisPads) {
        self.pad_t = pads.head;
        self.pad_b = pads.tail;
    }

    pub(crate) fn set_width_pads(&mut self, pads: AxisPads) {
        self.pad_l = pads.head;
        self.pad_r = pads.tail;
    }

    /// Runs the size calculator for the height axis with the current pads.
    pub fn compute_height(&self, height: usize) -> Result<AxisExtent, ConvPoolError> {
        compute_size_and_pad(
            height,
            self.stride_h,
            self.kernel_h,
            self.height_pads(),
            self.padding_policy,
            self.same_split,
        )
    }

    /// Runs the size calculator for the width axis with the current pads.
    pub fn compute_width(&self, width: usize) -> Result<AxisExtent, ConvPoolError> {
        compute_size_and_pad(
            width,
            self.stride_w,
            self.kernel_w,
            self.width_pads(),
            self.padding_policy,
            self.same_split,
        )
    }
}
