/// Helper macros for creating builtins
#[doc(hidden)]
#[macro_export]
macro_rules! __count {
    () => (0usize);
    ( $x:tt $($xs:tt)* ) => (1usize + $crate::__count!($($xs)*));
}

/**
    Creates a `Builtin`.

    `params(a, b)` binds exactly that many arguments by reference and fails with a
    wrong argument count error otherwise. `variadic(args)` passes the whole argument slice.
*/
#[macro_export]
macro_rules! builtin {

    ( $func_name:ident, params( $( $param:ident ),* ) => $body:expr ) => {
        {
            fn body(args: &[$crate::runtime::Object]) -> $crate::runtime::ExecResult<$crate::runtime::Object> {
                const _ARGC: usize = $crate::__count!( $( $param )* );

                let [ $( $param ),* ] = args else {
                    return Err($crate::runtime::RuntimeError::builtin_argument_count(args.len(), _ARGC));
                };

                $body
            }

            $crate::runtime::Builtin::new(stringify!($func_name), body)
        }
    };

    ( $func_name:ident, variadic( $args:ident ) => $body:expr ) => {
        {
            fn body($args: &[$crate::runtime::Object]) -> $crate::runtime::ExecResult<$crate::runtime::Object> {
                $body
            }

            $crate::runtime::Builtin::new(stringify!($func_name), body)
        }
    };

}
