// Reusable library API, shared by the CLI and the bench runner
pub mod anagram;
pub mod errors;
pub mod grouper;
pub mod letter_boxed;
pub mod letters;
pub mod log;
pub mod normalize;
pub mod spelling_bee;
pub mod word_bag;
pub mod word_list;
pub mod wordle;
