use std::cmp::Ordering;

use crate::data::number_types::nonzero::{NonzeroSign, NonzeroSigned};

macro_rules! nonzero_signed {
    ($t: ident) => {
        impl NonzeroSigned for $t {
            fn signum(&self) -> NonzeroSign {
                match self.cmp(&0) {
                    Ordering::Less => NonzeroSign::Negative,
                    Ordering::Greater => NonzeroSign::Positive,
                    Ordering::Equal => unreachable!("\
                        Should only be used on nonzero values.\
                    "),
                }
            }
        }
    }
}

nonzero_signed!(i8);
nonzero_signed!(i16);
nonzero_signed!(i32);
nonzero_signed!(i64);
nonzero_signed!(i128);
nonzero_signed!(isize);
