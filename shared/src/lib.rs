pub mod constants;
pub mod error;
pub mod prize;
pub mod segment;
pub mod quota_store;
pub mod wheel_math;
pub mod config;
pub mod i18n;
pub mod frame_clock;
pub mod shared_wheel_game;

pub use config::{LayoutKind, SpinConfig, SpinSettings, WheelConfig};
pub use error::{ConfigError, LayoutError, StorageError};
pub use frame_clock::{FrameClock, SteppedClock};
pub use prize::{PrizeId, QuotaState};
pub use quota_store::{KeyValueStorage, MemoryStorage, QuotaStore};
pub use segment::{Segment, SegmentLayout};
pub use shared_wheel_game::{spin_to_outcome, Outcome, SpinFrame, SpinPlan, SpinResult, WheelGame};
