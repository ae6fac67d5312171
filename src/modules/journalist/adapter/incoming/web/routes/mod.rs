mod directory;
mod profile;

pub use directory::{
    get_journalist_handler, list_journalists_handler, verify_journalist_handler,
    __path_get_journalist_handler, __path_list_journalists_handler,
    __path_verify_journalist_handler,
};
pub use profile::{
    delete_journalist_profile_handler, get_my_journalist_profile_handler,
    update_journalist_profile_handler, upsert_journalist_profile_handler, JournalistProfileForm,
    JournalistProfileRequest, __path_update_journalist_profile_handler,
    __path_upsert_journalist_profile_handler,
};
