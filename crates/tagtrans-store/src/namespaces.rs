//! Well-known tag namespaces in the dataset

pub const NAMESPACE_ROW: &str = "row";
pub const NAMESPACE_ARTIST: &str = "artist";
pub const NAMESPACE_CHARACTER: &str = "character";
pub const NAMESPACE_FEMALE: &str = "female";
pub const NAMESPACE_GROUP: &str = "group";
pub const NAMESPACE_LANGUAGE: &str = "language";
pub const NAMESPACE_MALE: &str = "male";
pub const NAMESPACE_MISC: &str = "misc";
pub const NAMESPACE_PARODY: &str = "parody";
pub const NAMESPACE_RECLASS: &str = "reclass";

/// All well-known namespaces, in display order
pub const ALL_NAMESPACES: [&str; 10] = [
    NAMESPACE_ROW,
    NAMESPACE_ARTIST,
    NAMESPACE_CHARACTER,
    NAMESPACE_FEMALE,
    NAMESPACE_GROUP,
    NAMESPACE_LANGUAGE,
    NAMESPACE_MALE,
    NAMESPACE_MISC,
    NAMESPACE_PARODY,
    NAMESPACE_RECLASS,
];
