//! Fixed reply texts.

pub const GREETING: &str =
    "Hello, I am NBA Basketbot! Use command /info to get more info on commands";

pub const COMMAND_INFO: &str = "*Type /player to get some basic info on a particular player.\n\
     *Type /average to get current season's average stat for a particular player.\n\
     *Type /recent to get a list of recently played games and their score (including live games).\n\
     *Type /stat to get a player's stat in any recent games";

pub const REFER_TO_INFO: &str = "Please type /info in order to see the commands";

pub const ASK_PLAYER_NAME: &str = "Enter a player's name:";

pub const PLEASE_WAIT: &str = "This might take several seconds...";

pub const PLEASE_WAIT_LONGER: &str = "This takes more than several seconds...";

pub const NO_PLAYER_FOUND: &str = "No such player was found";

pub const NO_RECENT_GAMES: &str = "No recent games were found";

pub const NO_PLAYER_GAME_FOUND: &str = "No such player/game was found";

pub const LOOKUP_FAILED: &str = "An error has occurred. Please try again later";

pub const TIMEOUT_NOTICE: &str = "I am tired of waiting. Hurry up next time :)";

/// The one name that gets a canned answer instead of a search.
pub const EASTER_EGG_NAME: &str = "Beka";

pub const EASTER_EGG_REPLY: &str = "Бека - 12Д. Верная рука. Позишн - позишнлес.";
