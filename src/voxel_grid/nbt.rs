use std::io::{Result, Write};

use byteorder::{BigEndian, WriteBytesExt};

const TAG_END: u8 = 0x00;
const TAG_SHORT: u8 = 0x02;
const TAG_BYTE_ARRAY: u8 = 0x07;
const TAG_STRING: u8 = 0x08;
const TAG_LIST: u8 = 0x09;
pub const TAG_COMPOUND: u8 = 0x0a;

/// Write-only subset of the NBT tag tree needed by schematic files.
/// All multi-byte fields are big-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
	Short(i16),
	String(String),
	/// Raw bytes, serialized behind a 4-byte length prefix counting bytes
	ByteArray(Vec<u8>),
	/// Homogeneous list; `element_id` names the payload type even when empty
	List { element_id: u8, items: Vec<Tag> },
	/// Named entries in insertion order, terminated by an End tag
	Compound(Vec<(String, Tag)>),
}

impl Tag {
	fn id(&self) -> u8 {
		match self {
			Tag::Short(_) => TAG_SHORT,
			Tag::String(_) => TAG_STRING,
			Tag::ByteArray(_) => TAG_BYTE_ARRAY,
			Tag::List { .. } => TAG_LIST,
			Tag::Compound(_) => TAG_COMPOUND,
		}
	}

	fn write_payload<W: Write>(&self, w: &mut W) -> Result<()> {
		match self {
			Tag::Short(value) => w.write_i16::<BigEndian>(*value),
			Tag::String(text) => write_string(w, text),
			Tag::ByteArray(bytes) => {
				w.write_u32::<BigEndian>(bytes.len() as u32)?;
				w.write_all(bytes)
			}
			Tag::List { element_id, items } => {
				debug_assert!(items.iter().all(|item| item.id() == *element_id));
				w.write_u8(*element_id)?;
				w.write_i32::<BigEndian>(items.len() as i32)?;
				for item in items {
					item.write_payload(w)?;
				}
				Ok(())
			}
			Tag::Compound(entries) => {
				for (name, tag) in entries {
					write_named(w, name, tag)?;
				}
				w.write_u8(TAG_END)
			}
		}
	}
}

fn write_string<W: Write>(w: &mut W, text: &str) -> Result<()> {
	w.write_u16::<BigEndian>(text.len() as u16)?;
	w.write_all(text.as_bytes())
}

fn write_named<W: Write>(w: &mut W, name: &str, tag: &Tag) -> Result<()> {
	w.write_u8(tag.id())?;
	write_string(w, name)?;
	tag.write_payload(w)
}

/// Serialize `root` as a named top-level tag, the on-disk NBT layout.
pub fn write_root<W: Write>(w: &mut W, name: &str, root: &Tag) -> Result<()> {
	write_named(w, name, root)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rendered(name: &str, tag: &Tag) -> Vec<u8> {
		let mut buf = Vec::new();
		write_root(&mut buf, name, tag).unwrap();
		buf
	}

	#[test]
	fn named_short_is_id_name_payload() {
		let bytes = rendered("Width", &Tag::Short(1));
		assert_eq!(
			bytes,
			[&[0x02, 0x00, 0x05][..], &b"Width"[..], &[0x00, 0x01][..]].concat()
		);
	}

	#[test]
	fn short_payload_is_signed_big_endian() {
		let bytes = rendered("W", &Tag::Short(-2));
		assert_eq!(&bytes[bytes.len() - 2..], &[0xff, 0xfe]);
	}

	#[test]
	fn string_carries_a_two_byte_length_prefix() {
		let bytes = rendered("Materials", &Tag::String("Alpha".to_string()));
		assert_eq!(
			bytes,
			[
				&[0x08, 0x00, 0x09][..],
				&b"Materials"[..],
				&[0x00, 0x05][..],
				&b"Alpha"[..],
			]
			.concat()
		);
	}

	#[test]
	fn byte_array_prefix_counts_bytes() {
		let bytes = rendered("Blocks", &Tag::ByteArray(vec![1]));
		assert_eq!(
			bytes,
			[
				&[0x07, 0x00, 0x06][..],
				&b"Blocks"[..],
				&[0x00, 0x00, 0x00, 0x01, 0x01][..],
			]
			.concat()
		);
	}

	#[test]
	fn empty_compound_list_keeps_its_element_type() {
		let tag = Tag::List { element_id: TAG_COMPOUND, items: Vec::new() };
		let bytes = rendered("Entities", &tag);
		assert_eq!(
			bytes,
			[
				&[0x09, 0x00, 0x08][..],
				&b"Entities"[..],
				&[0x0a, 0x00, 0x00, 0x00, 0x00][..],
			]
			.concat()
		);
	}

	#[test]
	fn compound_terminates_with_end_tag() {
		let tag = Tag::Compound(vec![("W".to_string(), Tag::Short(3))]);
		let bytes = rendered("S", &tag);
		assert_eq!(
			bytes,
			vec![0x0a, 0x00, 0x01, b'S', 0x02, 0x00, 0x01, b'W', 0x00, 0x03, 0x00]
		);
	}
}
