#[doc(hidden)]
#[macro_export]
macro_rules! __bigint_impl_from {
    ($($type:ty),*$(,)?) => {
        $(
        impl From<$type> for BigInt {
            fn from(x: $type) -> Self {
                BN::from(x).wrap()
            }
        }
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __bigint_impl_ops {
    () => {};
    ($op: ident $func:ident, $($rest:tt)*) => {
        impl ops::$op for &BigInt {
            type Output = BigInt;
            fn $func(self, rhs: Self) -> Self::Output {
                ops::$op::$func(self.inner_ref(), rhs.inner_ref()).wrap()
            }
        }
        impl ops::$op for BigInt {
            type Output = BigInt;
            fn $func(self, rhs: Self) -> Self::Output {
                ops::$op::$func(self.into_inner(), rhs.into_inner()).wrap()
            }
        }
        impl ops::$op<BigInt> for &BigInt {
            type Output = BigInt;
            fn $func(self, rhs: BigInt) -> Self::Output {
                ops::$op::$func(self.inner_ref(), rhs.into_inner()).wrap()
            }
        }
        impl ops::$op<&BigInt> for BigInt {
            type Output = BigInt;
            fn $func(self, rhs: &BigInt) -> Self::Output {
                ops::$op::$func(self.into_inner(), rhs.inner_ref()).wrap()
            }
        }
        $crate::__bigint_impl_ops!{ $($rest)* }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __bigint_impl_assigns {
    () => {};
    ($trait:ident $fn:ident, $($rest:tt)*) => {
        impl ops::$trait for BigInt {
            fn $fn(&mut self, rhs: BigInt) {
                ops::$trait::$fn(self.inner_mut(), rhs.into_inner())
            }
        }
        impl ops::$trait<&BigInt> for BigInt {
            fn $fn(&mut self, rhs: &BigInt) {
                ops::$trait::$fn(self.inner_mut(), rhs.inner_ref())
            }
        }
        $crate::__bigint_impl_assigns!{ $($rest)* }
    };
}
