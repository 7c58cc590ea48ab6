mod envelope;
pub use self::envelope::ApiResponse;

mod exercise;
pub use self::exercise::Exercise;

mod method;
pub use self::method::Method;

mod sheet;
pub use self::sheet::{
    ExerciseConfiguration, ExerciseGroup, ExerciseMethod, TrainingDay, TrainingSheet,
    TrainingSheetDetail,
};

mod schedule;
pub use self::schedule::{ScheduleDay, TrainingSchedule};

mod session;
pub use self::session::{ProviderSession, ProviderUser, Session, SessionUser};
