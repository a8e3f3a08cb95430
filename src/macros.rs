/// Implements negation plus element-wise `+ - * /` (and their assigning forms) for a
/// plain three-component `f32` struct, against both `Self` and `f32`.
macro_rules! impl_componentwise_ops {
    ($type:ident { $($field:ident),+ }) => {
        impl std::ops::Neg for $type {
            type Output = $type;

            fn neg(self) -> $type {
                $type { $($field: -self.$field),+ }
            }
        }

        impl_componentwise_ops!(@binary $type { $($field),+ } Add add AddAssign add_assign +);
        impl_componentwise_ops!(@binary $type { $($field),+ } Sub sub SubAssign sub_assign -);
        impl_componentwise_ops!(@binary $type { $($field),+ } Mul mul MulAssign mul_assign *);
        impl_componentwise_ops!(@binary $type { $($field),+ } Div div DivAssign div_assign /);

        // Scalars on the left only make sense for the commutative operators
        impl std::ops::Add<$type> for f32 {
            type Output = $type;

            fn add(self, other: $type) -> $type {
                $type { $($field: self + other.$field),+ }
            }
        }

        impl std::ops::Mul<$type> for f32 {
            type Output = $type;

            fn mul(self, other: $type) -> $type {
                $type { $($field: self * other.$field),+ }
            }
        }
    };

    (@binary $type:ident { $($field:ident),+ } $trait:ident $method:ident $assign_trait:ident $assign_method:ident $op:tt) => {
        impl std::ops::$trait<$type> for $type {
            type Output = $type;

            fn $method(self, other: $type) -> $type {
                $type { $($field: self.$field $op other.$field),+ }
            }
        }

        impl std::ops::$trait<f32> for $type {
            type Output = $type;

            fn $method(self, scalar: f32) -> $type {
                $type { $($field: self.$field $op scalar),+ }
            }
        }

        impl std::ops::$assign_trait<$type> for $type {
            fn $assign_method(&mut self, other: $type) {
                *self = *self $op other;
            }
        }

        impl std::ops::$assign_trait<f32> for $type {
            fn $assign_method(&mut self, scalar: f32) {
                *self = *self $op scalar;
            }
        }
    };
}
