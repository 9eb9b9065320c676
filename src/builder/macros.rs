//! Macros for ergonomic state machine construction.

/// Build a [`StateMachine`](crate::StateMachine) from a literal transition table.
///
/// State and event names are identifiers. Every state that appears as a
/// transition target must also be listed. Expands to a
/// `Result<StateMachine, MachineError>`.
///
/// # Example
///
/// ```
/// use retrace::machine;
///
/// let mut switch = machine! {
///     initial: off,
///     off => { power => on },
///     on => { power => off },
/// }
/// .unwrap();
///
/// switch.trigger("power").unwrap();
/// assert_eq!(switch.state(), "on");
/// ```
#[macro_export]
macro_rules! machine {
    (
        initial: $initial:ident,
        $(
            $state:ident => { $( $event:ident => $target:ident ),* $(,)? }
        ),* $(,)?
    ) => {{
        let builder = $crate::builder::MachineBuilder::new().initial(stringify!($initial));
        $(
            let builder = builder.state(stringify!($state));
            $(
                let builder = builder.transition(
                    stringify!($state),
                    stringify!($event),
                    stringify!($target),
                );
            )*
        )*
        builder.build()
    }};
}

#[cfg(test)]
mod tests {
    use crate::MachineError;

    #[test]
    fn machine_macro_builds_switch() {
        let mut machine = machine! {
            initial: off,
            off => { power => on },
            on => { power => off },
        }
        .unwrap();

        assert_eq!(machine.state(), "off");
        machine.trigger("power").unwrap();
        assert_eq!(machine.state(), "on");
    }

    #[test]
    fn machine_macro_supports_terminal_states() {
        let machine = machine! {
            initial: pending,
            pending => { start => running, cancel => cancelled },
            running => { finish => done },
            done => {},
            cancelled => {}
        }
        .unwrap();

        let states: Vec<String> = machine.states(None).iter().map(|s| s.to_string()).collect();
        assert_eq!(states, vec!["pending", "running", "done", "cancelled"]);
    }

    #[test]
    fn machine_macro_reports_missing_target() {
        let result = machine! {
            initial: a,
            a => { go => b },
        };

        assert!(matches!(result, Err(MachineError::Configuration { .. })));
    }
}
