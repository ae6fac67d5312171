mod directory;
mod profile;

pub use directory::{
    get_artist_handler, list_artists_handler, ArtistListQuery, __path_get_artist_handler,
    __path_list_artists_handler,
};
pub use profile::{
    delete_artist_profile_handler, get_my_artist_profile_handler, update_artist_profile_handler,
    upsert_artist_profile_handler, ArtistProfileForm, ArtistProfileRequest,
    __path_update_artist_profile_handler, __path_upsert_artist_profile_handler,
};
