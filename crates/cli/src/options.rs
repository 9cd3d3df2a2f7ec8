use clap::ValueEnum;
use lln_engine::options as engine_options;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Filename,
    Created,
    Size,
    User,
    Group,
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    SortBy,
    engine_options::SortKey,
    Filename,
    Created,
    Size,
    User,
    Group
);
