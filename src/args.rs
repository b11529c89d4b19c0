use clap::Parser;

/// Defaults reproduce a plain, argument-less run: the whole batch lands in
/// `./audio` in Arabic.
#[derive(Parser, Debug)]
pub struct Args {
    #[clap(long, default_value = "audio")]
    pub out: String,

    #[clap(long, default_value = "ar")]
    pub lang: String,

    #[clap(long, default_value_t = 200)]
    pub max_number: u32,
}
