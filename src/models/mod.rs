mod finding;
mod response;
mod wordlist;

pub use finding::MatchRecord;
pub use response::ResponseOutcome;
pub use wordlist::Wordlist;
