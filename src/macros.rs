/// Constructs a [`Value`](crate::Value) from a JSON-like literal.
///
/// Handy for tests and for building documents programmatically:
///
/// ```rust
/// use jsonsift::jsonsift;
///
/// let value = jsonsift!({
///     "name": "Alice",
///     "tags": ["admin", "ops"],
///     "active": true,
///     "manager": null
/// });
///
/// assert!(value.is_object());
/// ```
#[macro_export]
macro_rules! jsonsift {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::jsonsift!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::jsonsift!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Anything else goes through the From conversions on Value.
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
