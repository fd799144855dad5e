//! # Angle Value Objects
//!
//! 六十分法（度・分）の角度を表すバリューオブジェクト

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::domain::error::MeasurementError;

/// 1度あたりの分
pub const MINUTES_PER_DEGREE: f64 = 60.0;

/// `度°分′` 形式（U+00B0, U+2032）。分は小数を含んでもよい
static ANGLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+)°\s*([0-9.]+)′\s*$").expect("angle pattern is a valid regex")
});

/// 分光計で読み取った1回分の角度測定値
///
/// 度は整数値の `f64` で保持する（桁数に上限を設けない）。
/// 分が60以上でも正規化せず、入力されたまま保持する
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleMeasurement {
    degrees: f64,
    minutes: f64,
}

impl AngleMeasurement {
    #[cfg(test)]
    fn new(degrees: u32, minutes: f64) -> Self {
        Self {
            degrees: f64::from(degrees),
            minutes,
        }
    }

    /// `度°分′` 形式の文字列をパースする
    ///
    /// 前後の空白は無視する。文字列全体が書式に一致しない場合は部分的なパースは行わない
    ///
    /// # Errors
    ///
    /// 書式に一致しない場合、数値として解釈できない場合、
    /// または度・分が有限の値にならない場合に [`MeasurementError::InputFormat`] を返す
    ///
    /// ```
    /// use grating::domain::entities::angle::AngleMeasurement;
    ///
    /// let angle = AngleMeasurement::parse("30°15.5′").unwrap();
    /// assert_eq!(angle.degrees(), 30.0);
    /// assert_eq!(angle.minutes(), 15.5);
    /// ```
    pub fn parse(input: &str) -> Result<Self, MeasurementError> {
        let captures = ANGLE_PATTERN
            .captures(input)
            .ok_or_else(|| MeasurementError::input_format(input))?;

        let degrees = Self::parse_finite(&captures[1], input)?;
        let minutes = Self::parse_finite(&captures[2], input)?;

        Ok(Self { degrees, minutes })
    }

    // f64::from_str overflows to inf instead of failing
    fn parse_finite(part: &str, input: &str) -> Result<f64, MeasurementError> {
        part.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| MeasurementError::input_format(input))
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    /// 十進度数に変換
    pub fn to_decimal(&self) -> f64 {
        self.degrees + self.minutes / MINUTES_PER_DEGREE
    }
}

impl FromStr for AngleMeasurement {
    type Err = MeasurementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AngleMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{}′", self.degrees, self.minutes)
    }
}

/// 十進度数を度・分に戻した表現
///
/// 度は0方向への切り捨て、分は残りの端数×60
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreesMinutes {
    pub degrees: i64,
    pub minutes: f64,
}

impl DegreesMinutes {
    pub fn new(degrees: i64, minutes: f64) -> Self {
        Self { degrees, minutes }
    }

    /// 十進度数から変換（丸めではなく切り捨て）
    pub fn from_decimal(decimal_degrees: f64) -> Self {
        let degrees = decimal_degrees.trunc();
        Self {
            degrees: degrees as i64,
            minutes: (decimal_degrees - degrees) * MINUTES_PER_DEGREE,
        }
    }
}

impl fmt::Display for DegreesMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{:.2}′", self.degrees, self.minutes)
    }
}
