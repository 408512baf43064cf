//! Macros for ergonomic configuration construction.

/// Build a [`Config`](crate::config::Config) from a declarative table.
///
/// State and event names are written as identifiers and stored as their
/// string form. A state with no outgoing transitions is written `name => {}`.
///
/// # Example
///
/// ```
/// use waymark::{fsm_config, StateMachine};
///
/// let config = fsm_config! {
///     initial: idle,
///     states: {
///         idle => { run => active },
///         active => { stop => idle, crash => broken },
///         broken => {},
///     }
/// };
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("run").unwrap();
/// assert_eq!(machine.get_state(), "active");
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident => { $($event:ident => $target:ident),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut config = $crate::config::Config::new(stringify!($initial));
        $(
            #[allow(unused_variables)]
            let descriptor = config.declare_state(stringify!($state));
            $(
                descriptor.add_transition(stringify!($event), stringify!($target));
            )*
        )*
        config
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fsm_config_macro_builds_table() {
        let config = fsm_config! {
            initial: idle,
            states: {
                idle => { run => active },
                active => { stop => idle },
            }
        };

        assert_eq!(config.initial(), "idle");
        assert_eq!(config.target("idle", "run"), Some("active"));
        assert_eq!(config.target("active", "stop"), Some("idle"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn fsm_config_supports_empty_states() {
        let config = fsm_config! {
            initial: done,
            states: {
                done => {}
            }
        };

        assert!(config.contains_state("done"));
        assert!(config.state("done").unwrap().transitions.is_empty());
    }

    #[test]
    fn fsm_config_without_states() {
        let config = fsm_config! {
            initial: lonely,
            states: {}
        };

        assert!(config.states().is_empty());
        assert!(config.validate().is_err());
    }

    #[test]
    fn fsm_config_keeps_declaration_order() {
        let config = fsm_config! {
            initial: b,
            states: {
                c => { go => a },
                a => { go => b },
                b => { go => c },
            }
        };

        let order: Vec<&str> = config.states().keys().collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }
}
