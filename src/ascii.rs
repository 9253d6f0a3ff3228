pub(crate) const CR: u8 = b'\r';
pub(crate) const LF: u8 = b'\n';
pub(crate) const SP: u8 = b' ';
pub(crate) const COLON: u8 = b':';

pub(crate) fn atoi(data: &[u8]) -> Option<u32> {
    if data.is_empty() {
        return None;
    }

    data.iter().try_fold(0u32, |acc, digit| {
        if !digit.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u32::from(digit - b'0'))
    })
}

// Stack formatter for writing integers (status codes, content lengths) to the
// wire without allocating.  20 bytes holds any u64.
pub(crate) struct AsciiInt {
    buf: [u8; 20],
    start: usize,
}

impl AsciiInt {
    pub(crate) fn as_str(&self) -> &str {
        str::from_utf8(&self.buf[self.start..]).unwrap()
    }
}

impl From<u64> for AsciiInt {
    fn from(value: u64) -> Self {
        let mut buf = [0u8; 20];
        let mut start = buf.len();
        let mut rest = value;

        loop {
            start -= 1;
            buf[start] = b'0' + (rest % 10) as u8;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }

        AsciiInt { buf, start }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_atoi() {
        assert!(atoi("0".as_bytes()) == Some(0));
        assert!(atoi("5".as_bytes()) == Some(5));
        assert!(atoi("123".as_bytes()) == Some(123));
        assert!(atoi("123456789".as_bytes()) == Some(123456789));
        assert!(atoi("0123456789".as_bytes()) == Some(123456789));
        assert!(atoi("".as_bytes()) == None);
        assert!(atoi("abc".as_bytes()) == None);
        assert!(atoi("123a456".as_bytes()) == None);
    }

    #[test]
    fn test_itoa() {
        let a: AsciiInt = 0u64.into();
        assert!("0" == a.as_str(), "got: {:?}", a.as_str());
        let a: AsciiInt = 1u64.into();
        assert!("1" == a.as_str(), "got: {:?}", a.as_str());
        let a: AsciiInt = 12u64.into();
        assert!("12" == a.as_str(), "got: {:?}", a.as_str());
        let a: AsciiInt = 1203u64.into();
        assert!("1203" == a.as_str(), "got: {:?}", a.as_str());
        let a: AsciiInt = 12030u64.into();
        assert!("12030" == a.as_str(), "got: {:?}", a.as_str());
        let a: AsciiInt = u64::MAX.into();
        assert!(
            "18446744073709551615" == a.as_str(),
            "got: {:?}",
            a.as_str()
        );
    }
}
