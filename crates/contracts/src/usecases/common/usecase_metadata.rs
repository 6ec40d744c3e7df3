/// Identification and documentation of a UseCase
pub trait UseCaseMetadata {
    /// Index of the UseCase (for example "u601")
    fn usecase_index() -> &'static str;

    /// Technical name (for example "trigger_run")
    fn usecase_name() -> &'static str;

    /// Caption shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name like "u601_trigger_run", used as a stable key in the UI
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
