// src/engine/ident.rs
//
// Base identifier from a salary-file name. The site ids are
// `last5 + first2 + NN`; three-part names fold the first two parts into the
// five-letter head.

use crate::core::sanitize::name_parts;
use crate::engine::types::IdentError;

fn head(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

pub fn derive_base(name: &str) -> Result<String, IdentError> {
    let parts = name_parts(name);
    match parts.as_slice() {
        [first, last] => Ok(head(last, 5) + &head(first, 2)),
        [p0, p1, p2] => {
            let lead = head(p0, 5);
            let fill = 5usize.saturating_sub(lead.chars().count());
            Ok(lead + &head(p1, fill) + &head(p2, 2))
        }
        other => Err(IdentError::UnsupportedNamePartCount(other.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_parts() {
        assert_eq!(derive_base("Mike Trout").unwrap(), "troutmi");
        assert_eq!(derive_base("J.D. Martinez").unwrap(), "martijd");
        assert_eq!(derive_base("Jose Abreu").unwrap(), "abreujo");
    }

    #[test]
    fn short_parts_do_not_panic() {
        assert_eq!(derive_base("A Li").unwrap(), "lia");
        assert_eq!(derive_base("Travis d'Arnaud").unwrap(), "darnatr");
    }

    #[test]
    fn three_parts() {
        assert_eq!(derive_base("Abel De Santos").unwrap(), "abeldsa");
        assert_eq!(derive_base("Rafael De Los").unwrap(), "rafaelo");
    }

    #[test]
    fn unsupported_counts() {
        assert_eq!(derive_base("Ichiro"), Err(IdentError::UnsupportedNamePartCount(1)));
        assert_eq!(derive_base(""), Err(IdentError::UnsupportedNamePartCount(0)));
        assert_eq!(
            derive_base("Juan Carlos De La Cruz"),
            Err(IdentError::UnsupportedNamePartCount(5))
        );
    }

    #[test]
    fn multibyte_slicing() {
        assert_eq!(derive_base("José Peña").unwrap(), "peñajo");
    }
}
