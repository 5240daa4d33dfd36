//! Decoders for packed 64-bit LTE network identifiers.
//!
//! Record producers pack several protocol fields into one unsigned 64-bit
//! integer and ship it as a decimal digit string, because the value routinely
//! exceeds the 2^53 range an `f64` can carry exactly. Everything here works on
//! `u64`; no floating-point arithmetic touches an identifier.
//!
//! Values that cannot be read as `u64` (see [`RawValue::parse_identifier`])
//! are logged and rendered with the general passthrough.

use crate::value::RawValue;

/// ECI field width: 28 bits (3GPP TS 36.413 EUTRAN-CellIdentity).
pub const ECI_MASK: u64 = 0xFFF_FFFF;

/// eNodeB ID portion of the ECI: the upper 20 of its 28 bits.
pub const ENODEB_MASK: u64 = 0xFFF_FF00;

/// Shift that aligns the eNodeB ID after masking.
pub const ENODEB_SHIFT: u32 = 8;

/// Sector (cell) ID portion of the ECI: the low 8 bits.
pub const SECTOR_MASK: u64 = 0xFF;

/// PLMN field position in a packed network-element identifier (sits above the ECI).
pub const PLMN_SHIFT: u32 = 28;

/// PLMN field width: 20 bits.
pub const PLMN_MASK: u64 = 0xF_FFFF;

/// Display recomposition factor: PLMN occupies the digits above the 9 ECI digits.
pub const ECI_DIVISOR: u64 = 1_000_000_000;

/// Hex digits following the MCC in a packed GUMMEI (3 MNC + 4 MMEGI + 2 MMEC).
const GUMMEI_TAIL_DIGITS: usize = 9;

/// Decode a packed network-element identifier into `PLMN * 10^9 + ECI`.
///
/// # Examples
///
/// ```
/// use netrec_fmt::RawValue;
/// use netrec_fmt::format::bitfield;
///
/// // PLMN 0x310f2, ECI 0x1234567
/// assert_eq!(bitfield::network_element(&RawValue::from("53941050230119")), "200946019088743");
/// ```
pub fn network_element(value: &RawValue) -> String {
    match read_identifier(value) {
        Some(v) => decode_network_element(v).to_string(),
        None => value.to_string(),
    }
}

/// Recompose a packed identifier into its decimal PLMN/ECI display form.
///
/// Cannot overflow: PLMN is at most `0xFFFFF`, so the result stays below 2^50.
pub fn decode_network_element(value: u64) -> u64 {
    let plmn = (value >> PLMN_SHIFT) & PLMN_MASK;
    let eci = value & ECI_MASK;
    plmn * ECI_DIVISOR + eci
}

/// Decoded GUMMEI parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gummei {
    /// Mobile country code, as the leading hex digits.
    pub mcc: String,
    /// Mobile network code, with a 2-digit `f` filler removed.
    pub mnc: String,
    /// MME group ID, or `None` when the value is too short to contain one.
    pub mme_group_id: Option<u32>,
    /// MME code, or `None` when the value is too short to contain one.
    pub mme_code: Option<u32>,
}

impl Gummei {
    /// Slice a packed GUMMEI by its hex digits.
    ///
    /// The value is rendered as lowercase hex without leading zeros. The MCC
    /// is everything but the last 9 digits, the MNC the 3 digits after it.
    /// A leading `f` on the MNC is filler for a 2-digit MNC and is stripped;
    /// only that single-filler case exists in the encoding, so a 3-digit MNC
    /// is left as is.
    ///
    /// Short values clamp each slice at the start of the hex string.
    pub fn from_packed(value: u64) -> Self {
        let hex = format!("{:x}", value);
        let len = hex.len();
        let slice = |from_end: usize, to_end: usize| {
            &hex[len.saturating_sub(from_end)..len.saturating_sub(to_end)]
        };

        let mcc = slice(len, GUMMEI_TAIL_DIGITS).to_string();
        let raw_mnc = slice(9, 6);
        let mnc = raw_mnc.strip_prefix('f').unwrap_or(raw_mnc).to_string();
        let mme_group_id = u32::from_str_radix(slice(6, 2), 16).ok();
        let mme_code = u32::from_str_radix(slice(2, 0), 16).ok();

        Self {
            mcc,
            mnc,
            mme_group_id,
            mme_code,
        }
    }
}

/// `mcc.mnc.mmegi.mmec`, with the MME code zero-padded to 3 digits.
///
/// A missing group ID or code renders as `NaN`.
impl std::fmt::Display for Gummei {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.", self.mcc, self.mnc)?;
        match self.mme_group_id {
            Some(id) => write!(f, "{}.", id)?,
            None => f.write_str("NaN.")?,
        }
        match self.mme_code {
            Some(code) => write!(f, "{:03}", code),
            None => f.write_str("NaN"),
        }
    }
}

/// Decode a packed GUMMEI into `mcc.mnc.mmegi.mmec`.
///
/// # Examples
///
/// ```
/// use netrec_fmt::RawValue;
/// use netrec_fmt::format::bitfield;
///
/// // hex 310f2612340a: MCC 310, MNC f26 -> 26, MMEGI 0x1234, MMEC 0x0a
/// assert_eq!(bitfield::gummei(&RawValue::from("53941132997642")), "310.26.4660.010");
/// ```
pub fn gummei(value: &RawValue) -> String {
    match read_identifier(value) {
        Some(v) => Gummei::from_packed(v).to_string(),
        None => value.to_string(),
    }
}

/// Decoded eNodeB/sector pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnbId {
    pub enodeb: u32,
    pub sector: u32,
}

impl EnbId {
    /// Extract the eNodeB and sector from the low 32 bits of a packed value.
    pub fn from_packed(value: u64) -> Self {
        let eci = u64::from(value as u32) & ECI_MASK;
        Self {
            enodeb: ((eci & ENODEB_MASK) >> ENODEB_SHIFT) as u32,
            sector: (eci & SECTOR_MASK) as u32,
        }
    }
}

impl std::fmt::Display for EnbId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.enodeb, self.sector)
    }
}

/// Decode an LTE eNodeB identifier into `enodeb.sector`.
///
/// # Examples
///
/// ```
/// use netrec_fmt::RawValue;
/// use netrec_fmt::format::bitfield;
///
/// assert_eq!(bitfield::lte_enb_id(&RawValue::Number(74565.0)), "291.69");
/// ```
pub fn lte_enb_id(value: &RawValue) -> String {
    match read_identifier(value) {
        Some(v) => EnbId::from_packed(v).to_string(),
        None => value.to_string(),
    }
}

fn read_identifier(value: &RawValue) -> Option<u64> {
    if value.is_null() {
        return None;
    }
    match value.parse_identifier() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!(target: "netrec_fmt::format", { error = %e }, "unreadable packed identifier, falling back to general");
            None
        }
    }
}
