use ico_bmp::{DecodeError, DecodedImage, IcoDecoder, PixelFormat, RowOrder};
use std::io::Cursor;

//===========================================================================//

// One 2x2 24 bpp entry, stored bottom-up.  The stream holds the bottom row
// (11 12 13 21 22 23) before the top row (31 32 33 41 42 43).
const BGR_2X2_BOTTOM_UP: &[u8] = b"\
    \x00\x00\x01\x00\x01\x00\
    \
    \x02\x02\x00\x00\x01\x00\x18\x00\
    \x34\x00\x00\x00\x16\x00\x00\x00\
    \
    \x28\x00\x00\x00\x02\x00\x00\x00\x04\x00\x00\x00\
    \x01\x00\x18\x00\x00\x00\x00\x00\x00\x00\x00\x00\
    \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\
    \x00\x00\x00\x00\
    \
    \x11\x12\x13\x21\x22\x23\
    \x31\x32\x33\x41\x42\x43";

// The same pixels as a 32 bpp entry with a negative (top-down) width.
const BGRA_2X2_TOP_DOWN: &[u8] = b"\
    \x00\x00\x01\x00\x01\x00\
    \
    \x02\x02\x00\x00\x01\x00\x20\x00\
    \x38\x00\x00\x00\x16\x00\x00\x00\
    \
    \x28\x00\x00\x00\xfe\xff\xff\xff\x04\x00\x00\x00\
    \x01\x00\x20\x00\x00\x00\x00\x00\x00\x00\x00\x00\
    \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\
    \x00\x00\x00\x00\
    \
    \x11\x12\x13\xff\x21\x22\x23\x80\
    \x31\x32\x33\x00\x41\x42\x43\x7f";

//===========================================================================//

#[test]
fn decode_bgr_bottom_up() {
    let images = ico_bmp::decode_all(Cursor::new(BGR_2X2_BOTTOM_UP)).unwrap();
    assert_eq!(images.len(), 1);
    let image = &images[0];
    assert_eq!(image.format(), PixelFormat::Bgr8);
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 2);
    let expected: &[u8] = b"\
        \x31\x32\x33\x41\x42\x43\
        \x11\x12\x13\x21\x22\x23";
    assert_eq!(image.data(), expected);
    let metadata = image.metadata().unwrap();
    assert_eq!(metadata.entry().bits_per_pixel(), 24);
    assert_eq!(metadata.info().row_order(), RowOrder::BottomUp);
}

#[test]
fn decode_bgra_top_down() {
    let images = ico_bmp::decode_all(Cursor::new(BGRA_2X2_TOP_DOWN)).unwrap();
    assert_eq!(images.len(), 1);
    let image = &images[0];
    assert_eq!(image.format(), PixelFormat::Bgra8);
    assert_eq!((image.width(), image.height()), (2, 2));
    assert_eq!(image.data(), &BGRA_2X2_TOP_DOWN[62..]);
    assert_eq!(image.row(0), Some(&BGRA_2X2_TOP_DOWN[62..70]));
    assert_eq!(
        image.metadata().unwrap().info().row_order(),
        RowOrder::TopDown
    );
}

#[test]
fn decoding_is_repeatable() {
    let first = ico_bmp::decode_all(Cursor::new(BGR_2X2_BOTTOM_UP)).unwrap();
    let second = ico_bmp::decode_all(Cursor::new(BGR_2X2_BOTTOM_UP)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn not_an_ico_file() {
    let png: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR";
    assert!(ico_bmp::try_decode(Cursor::new(png)).unwrap().is_none());
    assert!(matches!(
        ico_bmp::decode_all(Cursor::new(png)),
        Err(DecodeError::NotRecognized)
    ));
}

#[test]
fn images_follow_directory_order() {
    let file = IcoBuilder::new()
        .entry(3, 1, 24, 3, &[0xa0; 9])
        .entry(1, 2, 32, 1, &[0xb0; 8])
        .entry(2, 2, 24, -2, &[0xc0; 12])
        .build_reversed();
    let images: Vec<DecodedImage> = ico_bmp::try_decode(Cursor::new(file))
        .unwrap()
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    let sizes: Vec<(u32, u32)> =
        images.iter().map(|image| (image.width(), image.height())).collect();
    assert_eq!(sizes, vec![(3, 1), (1, 2), (2, 2)]);
    assert_eq!(images[0].data(), &[0xa0u8; 9][..]);
    assert_eq!(images[1].data(), &[0xb0u8; 8][..]);
    assert_eq!(images[2].data(), &[0xc0u8; 12][..]);
}

#[test]
fn zero_size_bytes_mean_256() {
    let pixels = vec![0x5au8; 256 * 256 * 3];
    let file = IcoBuilder::new().entry(0, 0, 24, 0, &pixels).build();
    let images = ico_bmp::decode_all(Cursor::new(file)).unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].width(), 256);
    assert_eq!(images[0].height(), 256);
    assert_eq!(images[0].data().len(), 256 * 256 * 3);
}

#[test]
fn overlapping_entries_are_decoded_independently() {
    let mut file = IcoBuilder::new()
        .entry(1, 1, 24, 1, b"\x01\x02\x03")
        .entry(1, 1, 24, 1, b"\x04\x05\x06")
        .build();
    // Point the second entry at the first entry's data.
    let first_offset = file[18..22].to_vec();
    file[34..38].copy_from_slice(&first_offset);
    let images = ico_bmp::decode_all(Cursor::new(file)).unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].data(), b"\x01\x02\x03");
    assert_eq!(images[1].data(), b"\x01\x02\x03");
}

#[test]
fn unsupported_bit_depth() {
    let file = IcoBuilder::new().entry(1, 1, 16, 1, b"\x00\x00").build();
    match ico_bmp::decode_all(Cursor::new(file)) {
        Err(DecodeError::UnsupportedBitDepth { bit_count, supported }) => {
            assert_eq!(bit_count, 16);
            assert_eq!(supported, &[24u16, 32]);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn second_palette_entry_yields_nothing() {
    let mut file = IcoBuilder::new()
        .entry(1, 1, 24, 1, b"\x01\x02\x03")
        .entry(1, 1, 24, 1, b"\x04\x05\x06")
        .build();
    file[24] = 2; // colors byte of the second entry
    assert!(matches!(
        ico_bmp::try_decode(Cursor::new(file)),
        Err(DecodeError::UnsupportedColorPalette { index: 1, colors: 2 })
    ));
}

#[test]
fn truncated_pixel_data() {
    let file = &BGR_2X2_BOTTOM_UP[..(BGR_2X2_BOTTOM_UP.len() - 1)];
    let mut images = ico_bmp::try_decode(Cursor::new(file)).unwrap().unwrap();
    assert!(matches!(images.next(), Some(Err(DecodeError::TruncatedStream))));
    assert!(images.next().is_none());
}

#[test]
fn decode_from_borrowed_stream() {
    let mut cursor = Cursor::new(BGR_2X2_BOTTOM_UP);
    let count = IcoDecoder::new().decode(&mut cursor).unwrap().count();
    assert_eq!(count, 1);
    assert_eq!(cursor.position(), BGR_2X2_BOTTOM_UP.len() as u64);
}

//===========================================================================//

struct IcoBuilder {
    entries: Vec<(u8, u8, u16, i32, Vec<u8>)>,
}

impl IcoBuilder {
    fn new() -> IcoBuilder {
        IcoBuilder { entries: Vec::new() }
    }

    fn entry(
        mut self,
        width: u8,
        height: u8,
        bit_count: u16,
        header_width: i32,
        pixels: &[u8],
    ) -> IcoBuilder {
        self.entries.push((width, height, bit_count, header_width, pixels.to_vec()));
        self
    }

    fn build(self) -> Vec<u8> {
        self.build_with_order(false)
    }

    /// Stores the image data in the reverse of directory order.
    fn build_reversed(self) -> Vec<u8> {
        self.build_with_order(true)
    }

    fn build_with_order(self, reversed: bool) -> Vec<u8> {
        let mut blobs: Vec<Vec<u8>> = Vec::new();
        for &(_, height, bit_count, header_width, ref pixels) in &self.entries {
            let mut blob = Vec::new();
            blob.extend_from_slice(&40u32.to_le_bytes());
            blob.extend_from_slice(&header_width.to_le_bytes());
            blob.extend_from_slice(&(2 * i32::from(height)).to_le_bytes());
            blob.extend_from_slice(&1u16.to_le_bytes());
            blob.extend_from_slice(&bit_count.to_le_bytes());
            blob.extend_from_slice(&[0u8; 24]);
            blob.extend_from_slice(pixels);
            blobs.push(blob);
        }
        let data_start = 6 + 16 * self.entries.len();
        let mut offsets = vec![0usize; blobs.len()];
        let mut offset = data_start;
        let mut order: Vec<usize> = (0..blobs.len()).collect();
        if reversed {
            order.reverse();
        }
        for &index in &order {
            offsets[index] = offset;
            offset += blobs[index].len();
        }
        let mut file = vec![0, 0, 1, 0];
        file.extend_from_slice(&(self.entries.len() as u16).to_le_bytes());
        for (index, &(width, height, bit_count, _, _)) in
            self.entries.iter().enumerate()
        {
            file.extend_from_slice(&[width, height, 0, 0]);
            file.extend_from_slice(&1u16.to_le_bytes());
            file.extend_from_slice(&bit_count.to_le_bytes());
            file.extend_from_slice(&(blobs[index].len() as u32).to_le_bytes());
            file.extend_from_slice(&(offsets[index] as u32).to_le_bytes());
        }
        for &index in &order {
            file.extend_from_slice(&blobs[index]);
        }
        file
    }
}

//===========================================================================//
