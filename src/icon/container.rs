use super::IconError;

const HEADER_LEN: usize = 6;
const ENTRY_LEN: usize = 16;
const ICON_TYPE: u16 = 1;
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// One image directory entry of an ICO file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    pub data_len: u32,
    pub data_offset: u32,
    /// Frame payload is a PNG stream rather than a BMP
    pub is_png: bool,
}

fn u16_at(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn u32_at(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

// 0 in the width/height byte means 256
fn dimension(byte: u8) -> u32 {
    if byte == 0 { 256 } else { byte as u32 }
}

/// Parse the header and directory of an ICO container.
pub fn read_directory(bytes: &[u8]) -> Result<Vec<IconEntry>, IconError> {
    if bytes.len() < HEADER_LEN {
        return Err(IconError::Malformed(format!("{} bytes is shorter than the header", bytes.len())));
    }
    if u16_at(bytes, 0) != 0 || u16_at(bytes, 2) != ICON_TYPE {
        return Err(IconError::Malformed("not an icon header".into()));
    }

    let count = u16_at(bytes, 4) as usize;
    let dir_end = HEADER_LEN + count * ENTRY_LEN;
    if bytes.len() < dir_end {
        return Err(IconError::Malformed(format!("directory of {} entries is truncated", count)));
    }

    (0..count)
        .map(|i| {
            let at = HEADER_LEN + i * ENTRY_LEN;
            let data_len = u32_at(bytes, at + 8);
            let data_offset = u32_at(bytes, at + 12);
            let start = data_offset as usize;
            let end = start + data_len as usize;
            if start < dir_end || end > bytes.len() {
                return Err(IconError::Malformed(format!(
                    "entry {} points outside the file ({}..{})", i, start, end
                )));
            }
            Ok(IconEntry {
                width: dimension(bytes[at]),
                height: dimension(bytes[at + 1]),
                bits_per_pixel: u16_at(bytes, at + 6),
                data_len,
                data_offset,
                is_png: bytes[start..end].starts_with(&PNG_SIGNATURE),
            })
        })
        .collect()
}
