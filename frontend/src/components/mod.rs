pub mod icons;

pub use icons::{PlusIcon, SparklesIcon, TrashIcon};
