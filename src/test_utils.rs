#[cfg(test)]
#[macro_export]
macro_rules! test_for_all_integers {
    (#[should_panic] $fn: ident) => {
        crate::test_for_all_integers!([#[should_panic]] $fn);
    };
    ($fn: ident) => {
        crate::test_for_all_integers!([] $fn);
    };
    ([$($attrs:tt)*] $fn: ident) => {
        crate::test_for_all!{[$($attrs)*] $fn =>
            i8 = i8,
            i16 = i16,
            i32 = i32,
            i64 = i64,
            i128 = i128,
            u8 = u8,
            u16 = u16,
            u32 = u32,
            u64 = u64,
            u128 = u128,
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! test_for_all {
    ([$($attrs:tt)*] $fn: ident =>) => {};
    ([$($attrs:tt)*] $fn: ident => $inst_name: ident = $inst:ty, $($rest: tt)*) => {
        paste::paste!{
            #[test]
            $($attrs)*
            fn [<$fn _$inst_name>]() {
                $fn::<$inst>()
            }
        }
        crate::test_for_all!([$($attrs)*] $fn => $($rest)*);
    };
}
