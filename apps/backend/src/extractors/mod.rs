pub mod current_user;
pub mod validated_json;

pub use current_user::{AuthContext, CurrentUser};
pub use validated_json::ValidatedJson;
