//! Application services - Use case implementations

mod geolocation_provider;
mod location_state;
mod map_view;
mod notice;

pub use geolocation_provider::{GeolocationProvider, GeolocationRetryPolicy, MAX_RETRIES_CAP};
pub use location_state::{LocationState, Outcome};
pub use map_view::{
    DEFAULT_ZOOM, LOCATE_BUSY_LABEL, LOCATE_IDLE_LABEL, MapMarker, MapSnapshot,
};
pub use notice::{Notice, NoticeKind};
