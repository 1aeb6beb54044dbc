//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`] from a declarative table.
///
/// Expands to [`ConfigBuilder`] calls and yields
/// `Result<MachineConfig, ConfigError>`, so target typos surface at
/// construction rather than at trigger time.
///
/// # Example
///
/// ```
/// use waypoint::machine_config;
///
/// let config = machine_config! {
///     initial: hungry,
///     states: {
///         hungry => { eat => fed },
///         fed => { rest => hungry },
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.initial, "hungry");
/// ```
///
/// [`MachineConfig`]: crate::MachineConfig
/// [`ConfigBuilder`]: crate::ConfigBuilder
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:ident,
        states: {
            $( $state:ident => { $( $event:ident => $target:ident ),* $(,)? } ),* $(,)?
        }
    ) => {{
        #[allow(unused_mut)]
        let mut builder = $crate::MachineConfig::builder().initial(stringify!($initial));
        $(
            builder = builder.state(stringify!($state));
            $(
                builder = builder.transition(
                    stringify!($state),
                    stringify!($event),
                    stringify!($target),
                );
            )*
        )*
        builder.build()
    }};
}
