mod edit_mode;
mod presenter;
mod saved_state;

pub use edit_mode::EditMode;
pub use presenter::{
    DnsServerConfigPresenter, CONFIG_LOAD_FAILED_MESSAGE, RAW_TEXT_INVALID_MESSAGE,
    RESET_TO_DEFAULT_MESSAGE,
};
pub use saved_state::SavedState;
