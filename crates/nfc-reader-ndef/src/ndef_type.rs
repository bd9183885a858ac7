/// The 3-bit type name format (TNF) field of an NDEF record header
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    uniffi::Enum,
)]
#[strum(serialize_all = "kebab-case")]
pub enum TypeNameFormat {
    Empty,
    WellKnown,
    Mime,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
    Reserved,
}

impl TypeNameFormat {
    /// Only the low 3 bits are the TNF, the rest of the header byte is ignored
    pub const fn from_header_bits(value: u8) -> Self {
        match value & 0b111 {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Mime,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }

    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::WellKnown => 1,
            Self::Mime => 2,
            Self::AbsoluteUri => 3,
            Self::External => 4,
            Self::Unknown => 5,
            Self::Unchanged => 6,
            Self::Reserved => 7,
        }
    }
}

impl From<u8> for TypeNameFormat {
    fn from(value: u8) -> Self {
        Self::from_header_bits(value)
    }
}

mod ffi {
    use super::TypeNameFormat;

    #[uniffi::export]
    fn type_name_format_from_raw(value: u8) -> TypeNameFormat {
        TypeNameFormat::from_header_bits(value)
    }

    #[uniffi::export]
    fn type_name_format_to_string(tnf: TypeNameFormat) -> String {
        tnf.to_string()
    }
}
