use super::Complex;
use crate::num::Real;
use regex::Regex;
use simple_error::{bail, SimpleError};
use std::str::FromStr;
use std::sync::OnceLock;

macro_rules! unwrap_or_bail {
    ($opt: expr, $msg: expr) => {
        match $opt {
            Some(v) => v,
            None => {
                bail!($msg);
            }
        }
    };
}

const NUMBER: &str = r"(?:(?i:nan|inf|infinity)|\d+\.?\d*(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?)";

fn re_rectangular() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"^(?<re>[+-]?{n})\s*(?<sign>[+-])\s*(?<im>{n})?\s*\*?\s*i$",
            n = NUMBER
        ))
        .expect("Invalid regex!")
    })
}

fn re_imaginary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^(?<sign>[+-]?)(?<im>{n})?\s*\*?\s*i$", n = NUMBER))
            .expect("Invalid regex!")
    })
}

fn re_real() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"^[+-]?{n}$", n = NUMBER)).expect("Invalid regex!"))
}

fn component<T: Real>(text: &str) -> Result<T, SimpleError> {
    match text.parse::<T>() {
        Ok(v) => Ok(v),
        Err(_) => Err(SimpleError::new(format!(
            "invalid complex component '{}'",
            text
        ))),
    }
}

// A missing coefficient in front of `i` means one.
fn imaginary_part<T: Real>(sign: &str, digits: Option<&str>) -> Result<T, SimpleError> {
    let magnitude = match digits {
        Some(digits) => component::<T>(digits)?,
        None => T::one(),
    };
    Ok(if sign == "-" { -magnitude } else { magnitude })
}

/// Parses the shapes produced by `Display`: `3`, `-2.5i`, `i`, `1 + 2i`, `-NaN - 4i`, ...
impl<T: Real> FromStr for Complex<T> {
    type Err = SimpleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            bail!("empty string is not a complex number");
        }

        if re_real().is_match(text) {
            return Ok(Complex::from_real(component(text)?));
        }

        if let Some(caps) = re_imaginary().captures(text) {
            let sign = unwrap_or_bail!(caps.name("sign"), "missing sign").as_str();
            let im = imaginary_part(sign, caps.name("im").map(|m| m.as_str()))?;
            return Ok(Complex::from_imaginary(im));
        }

        let caps = match re_rectangular().captures(text) {
            Some(caps) => caps,
            None => {
                return Err(SimpleError::new(format!(
                    "string '{}' not recognized as a complex number",
                    s
                )))
            }
        };
        let re = component(unwrap_or_bail!(caps.name("re"), "missing real part").as_str())?;
        let sign = unwrap_or_bail!(caps.name("sign"), "missing sign").as_str();
        let im = imaginary_part(sign, caps.name("im").map(|m| m.as_str()))?;
        Ok(Complex::new(re, im))
    }
}
