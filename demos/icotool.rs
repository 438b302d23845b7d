use clap::{App, Arg, SubCommand};
use ico_bmp::{DecodedImage, PixelFormat};
use std::fs;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

//===========================================================================//

fn main() {
    env_logger::init();
    let matches = App::new("icotool")
        .version("0.1")
        .about("Inspects ICO files")
        .subcommand(
            SubCommand::with_name("extract")
                .about("Extracts an image from an ICO file as a PNG")
                .arg(
                    Arg::with_name("output")
                        .takes_value(true)
                        .value_name("PATH")
                        .short("o")
                        .long("output")
                        .help("Sets output path"),
                )
                .arg(Arg::with_name("ico").required(true))
                .arg(Arg::with_name("index").required(true)),
        )
        .subcommand(
            SubCommand::with_name("list")
                .about("Lists images in an ICO file")
                .arg(Arg::with_name("ico").required(true)),
        )
        .get_matches();
    let result = if let Some(submatches) = matches.subcommand_matches("extract")
    {
        let path = submatches.value_of("ico").unwrap();
        let index = submatches.value_of("index").unwrap();
        let out_path = if let Some(out) = submatches.value_of("output") {
            PathBuf::from(out)
        } else {
            PathBuf::from(format!("{}.{}.png", path, index))
        };
        match index.parse::<usize>() {
            Ok(index) => extract(path, index, out_path),
            Err(error) => Err(format!("Invalid index {:?}: {}", index, error)),
        }
    } else if let Some(submatches) = matches.subcommand_matches("list") {
        list(submatches.value_of("ico").unwrap())
    } else {
        Err(matches.usage().to_string())
    };
    if let Err(message) = result {
        eprintln!("{}", message);
        process::exit(1);
    }
}

fn list(path: &str) -> Result<(), String> {
    let file = fs::File::open(path).map_err(|error| error.to_string())?;
    let images = match ico_bmp::try_decode(file) {
        Ok(Some(images)) => images,
        Ok(None) => return Err(format!("{} is not an ICO file", path)),
        Err(error) => return Err(error.to_string()),
    };
    for (index, image) in images.enumerate() {
        match image {
            Ok(image) => {
                let offset = image
                    .metadata()
                    .map(|metadata| metadata.entry().data_offset())
                    .unwrap_or(0);
                println!(
                    "{:5}: {}x{} {:?} at offset {}",
                    index,
                    image.width(),
                    image.height(),
                    image.format(),
                    offset
                );
            }
            Err(error) => println!("{:5}: error: {}", index, error),
        }
    }
    Ok(())
}

fn extract(path: &str, index: usize, out_path: PathBuf) -> Result<(), String> {
    let file = fs::File::open(path).map_err(|error| error.to_string())?;
    let mut images = ico_bmp::IcoDecoder::new()
        .decode(file)
        .map_err(|error| format!("{}: {}", path, error))?;
    let image = match images.nth(index) {
        Some(image) => image.map_err(|error| error.to_string())?,
        None => return Err(format!("{} has no image {}", path, index)),
    };
    let out_file =
        fs::File::create(&out_path).map_err(|error| error.to_string())?;
    write_png(&image, BufWriter::new(out_file))
        .map_err(|error| format!("{:?}: {}", out_path, error))
}

fn write_png<W: io::Write>(
    image: &DecodedImage,
    writer: W,
) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_depth(png::BitDepth::Eight);
    let bytes_per_pixel = image.format().bytes_per_pixel();
    encoder.set_color(match image.format() {
        PixelFormat::Bgr8 => png::ColorType::Rgb,
        PixelFormat::Bgra8 => png::ColorType::Rgba,
    });
    // PNG wants RGB(A), the decoder hands out BGR(A).
    let mut data = image.data().to_vec();
    for pixel in data.chunks_exact_mut(bytes_per_pixel) {
        pixel.swap(0, 2);
    }
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&data)?;
    Ok(())
}

//===========================================================================//
