pub mod setup;

pub use setup::Setup;
pub use setup::SetupCMD;
pub use setup::SetupParams;
pub use setup::SetupReport;
