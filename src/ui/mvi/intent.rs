/// Marker for events fed to a reducer.
///
/// Both user actions (pressing submit) and completions of background work
/// (a response arriving) are intents.
pub trait Intent: Send + 'static {}
