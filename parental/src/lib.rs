pub mod pin;
pub mod profiles;
pub mod screen_time;
pub mod settings;

pub use pin::{ParentalPin, PinVerification};
pub use profiles::KidProfile;
pub use screen_time::{PlaybackGate, ScreenTimeTracker};
pub use settings::ParentalSettings;
