use cgmath::{BaseFloat, Matrix3, Point2, Rad, Vector2, Vector3};

/// An extension trait for [`cgmath::Matrix3`] that adds methods for
/// constructing and applying 2D homogeneous transformations.
///
/// `cgmath` is primarily built for 3D applications, so `Matrix3` is treated as
/// a non-translating 3D transformation matrix by its own constructors. The
/// methods provided here interpret it as a homogeneous transformation matrix of
/// the 2D plane instead, using the column-vector convention (`m * v`).
pub trait Matrix3TwoDimExt<S>: Sized {
    /// Create a homogeneous transformation matrix from a translation vector.
    fn from_translation(v: Vector2<S>) -> Self;
    /// Create a homogeneous transformation matrix from a set of scale values.
    fn from_nonuniform_scale_2d(x: S, y: S) -> Self;
    /// Create a homogeneous transformation matrix from a rotation about the
    /// origin. Positive angles rotate counter-clockwise.
    fn from_angle<A: Into<Rad<S>>>(theta: A) -> Self;
    /// Create a homogeneous transformation matrix from a rotation about
    /// `center`.
    ///
    /// This is equivalent to translating `center` to the origin, rotating, and
    /// translating back.
    fn from_angle_about<A: Into<Rad<S>>>(center: Point2<S>, theta: A) -> Self;

    /// Apply the transformation to a point. The matrix is assumed to be
    /// affine (the bottom row is `[0, 0, 1]`).
    fn transform_point_2d(&self, p: Point2<S>) -> Point2<S>;
}

impl<S: BaseFloat> Matrix3TwoDimExt<S> for Matrix3<S> {
    #[inline]
    fn from_translation(v: Vector2<S>) -> Self {
        #[cfg_attr(rustfmt, rustfmt_skip)]
        Self::new(
            S::one(), S::zero(), S::zero(),
            S::zero(), S::one(), S::zero(),
            v.x, v.y, S::one(),
        )
    }

    #[inline]
    fn from_nonuniform_scale_2d(x: S, y: S) -> Self {
        #[cfg_attr(rustfmt, rustfmt_skip)]
        Self::new(
            x, S::zero(), S::zero(),
            S::zero(), y, S::zero(),
            S::zero(), S::zero(), S::one(),
        )
    }

    #[inline]
    fn from_angle<A: Into<Rad<S>>>(theta: A) -> Self {
        Self::from_angle_z(theta)
    }

    #[inline]
    fn from_angle_about<A: Into<Rad<S>>>(center: Point2<S>, theta: A) -> Self {
        let offset = Vector2::new(center.x, center.y);
        <Self as Matrix3TwoDimExt<S>>::from_translation(offset)
            * <Self as Matrix3TwoDimExt<S>>::from_angle(theta)
            * <Self as Matrix3TwoDimExt<S>>::from_translation(-offset)
    }

    #[inline]
    fn transform_point_2d(&self, p: Point2<S>) -> Point2<S> {
        let v = self * Vector3::new(p.x, p.y, S::one());
        Point2::new(v.x, v.y)
    }
}
