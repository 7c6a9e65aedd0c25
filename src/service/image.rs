use std::cmp::Reverse;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use icns::{IconFamily, PixelFormat};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};
use log::{info, warn};
use crate::config::config::OutputFormat;
use crate::error::ConvertError;
use crate::models::conversion::ConversionResult;
use crate::models::file::InputFile;
use crate::service::traits::i_service::ImageServiceTrait;

/// 圖像服務，負責 .icns 解碼、色彩正規化與 PNG 編碼並實現 ImageServiceTrait
pub struct ImageService {
    format: OutputFormat,
}

impl ImageService {
    pub fn new(format: OutputFormat) -> Self {
        ImageService { format }
    }

    pub fn output_path(&self, file: &InputFile, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.{}", file.stem(), self.format.extension()))
    }
}

impl Default for ImageService {
    fn default() -> Self {
        Self::new(OutputFormat::Png)
    }
}

impl ImageServiceTrait for ImageService {
    /// 解碼後的圖像只存在於此函數內，離開時即釋放
    fn convert_file(&self, file: &InputFile, output_dir: &Path) -> Result<ConversionResult, ConvertError> {
        let original_size = fs::metadata(&file.path)?.len();

        let image = normalize(decode_icns(&file.path)?);
        let output_path = self.output_path(file, output_dir);
        let buffer = encode_png(&image)?;
        write_output_file(&buffer, &output_path)?;

        let converted_size = fs::metadata(&output_path)?.len();
        if converted_size == 0 {
            return Err(ConvertError::EmptyOutput(output_path));
        }

        info!(
            "轉換完成：{} -> {}，{} 位元組 -> {} 位元組",
            file.path.display(), output_path.display(), original_size, converted_size
        );

        Ok(ConversionResult {
            filename: file.name.clone(),
            original_size,
            converted_size,
        })
    }
}

/// 讀取圖示家族並解碼其中最大的圖像；最大者無法解碼時依尺寸往下嘗試
pub fn decode_icns(path: &Path) -> Result<DynamicImage, ConvertError> {
    let reader = BufReader::new(File::open(path)?);
    let family = IconFamily::read(reader).map_err(|e| ConvertError::Decode(e.to_string()))?;

    let mut icon_types = family.available_icons();
    // sort_by_key 為穩定排序，同尺寸時保留原本順序
    icon_types.sort_by_key(|t| Reverse(u64::from(t.pixel_width()) * u64::from(t.pixel_height())));

    let mut last_error = None;
    for icon_type in icon_types {
        match family.get_icon_with_type(icon_type) {
            Ok(icon) => return to_dynamic(icon),
            Err(e) => {
                warn!("無法解碼 {} 中的 {:?} 圖像，改用較小的尺寸：{}", path.display(), icon_type, e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(ConvertError::Decode(e.to_string())),
        None => Err(ConvertError::NoIcon),
    }
}

/// 將 icns 的像素資料轉為 DynamicImage
pub fn to_dynamic(icon: icns::Image) -> Result<DynamicImage, ConvertError> {
    let (width, height) = (icon.width(), icon.height());
    let image = match icon.pixel_format() {
        PixelFormat::RGBA => RgbaImage::from_raw(width, height, icon.data().to_vec())
            .map(DynamicImage::ImageRgba8),
        PixelFormat::RGB => RgbImage::from_raw(width, height, icon.data().to_vec())
            .map(DynamicImage::ImageRgb8),
        PixelFormat::GrayAlpha => GrayAlphaImage::from_raw(width, height, icon.data().to_vec())
            .map(DynamicImage::ImageLumaA8),
        PixelFormat::Gray => GrayImage::from_raw(width, height, icon.data().to_vec())
            .map(DynamicImage::ImageLuma8),
        PixelFormat::Alpha => {
            let rgba = icon.convert_to(PixelFormat::RGBA);
            RgbaImage::from_raw(width, height, rgba.data().to_vec())
                .map(DynamicImage::ImageRgba8)
        }
    };
    image.ok_or(ConvertError::InvalidPixelData { width, height })
}

/// RGB8 與 RGBA8 保持原樣，其餘一律轉為 RGBA8
pub fn normalize(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => image,
        other => DynamicImage::ImageRgba8(other.to_rgba8()),
    }
}

/// 以快速壓縮、不濾波的方式編碼，速度優先於檔案大小
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, ConvertError> {
    let mut buffer = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buffer, CompressionType::Fast, FilterType::NoFilter);
    image.write_with_encoder(encoder)?;
    Ok(buffer)
}

pub fn write_output_file(data: &[u8], output_path: &Path) -> Result<(), ConvertError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(data)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use icns::{IconElement, IconType, OSType};
    use image::{ColorType, GenericImageView};

    fn write_icns(path: &Path, icon: &icns::Image, icon_type: IconType) {
        let mut family = IconFamily::new();
        family.add_icon_with_type(icon, icon_type).unwrap();
        let file = BufWriter::new(File::create(path).unwrap());
        family.write(file).unwrap();
    }

    fn rgb_icon(size: u32) -> icns::Image {
        let mut icon = icns::Image::new(PixelFormat::RGB, size, size);
        for (i, byte) in icon.data_mut().iter_mut().enumerate() {
            *byte = (i % 251) as u8;
        }
        icon
    }

    #[test]
    fn normalize_keeps_rgb_and_rgba() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        assert_eq!(normalize(rgb).color(), ColorType::Rgb8);
        let rgba = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        assert_eq!(normalize(rgba).color(), ColorType::Rgba8);
    }

    #[test]
    fn normalize_converts_gray_to_rgba() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, image::Luma([77])));
        let normalized = normalize(gray);
        assert_eq!(normalized.color(), ColorType::Rgba8);
        assert_eq!(normalized.get_pixel(1, 1).0, [77, 77, 77, 255]);

        let gray_alpha = DynamicImage::ImageLumaA8(GrayAlphaImage::new(3, 1));
        assert_eq!(normalize(gray_alpha).color(), ColorType::Rgba8);
    }

    #[test]
    fn to_dynamic_maps_pixel_formats() {
        let gray = icns::Image::new(PixelFormat::Gray, 4, 4);
        assert_eq!(to_dynamic(gray).unwrap().color(), ColorType::L8);

        let alpha = icns::Image::new(PixelFormat::Alpha, 4, 4);
        assert_eq!(to_dynamic(alpha).unwrap().color(), ColorType::Rgba8);

        let rgb = rgb_icon(16);
        let dynamic = to_dynamic(rgb).unwrap();
        assert_eq!(dynamic.dimensions(), (16, 16));
        assert_eq!(dynamic.color(), ColorType::Rgb8);
    }

    #[test]
    fn decode_picks_largest_icon() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("multi.icns");
        let mut family = IconFamily::new();
        family.add_icon_with_type(&rgb_icon(16), IconType::RGB24_16x16).unwrap();
        family.add_icon_with_type(&rgb_icon(48), IconType::RGB24_48x48).unwrap();
        family.add_icon_with_type(&rgb_icon(32), IconType::RGB24_32x32).unwrap();
        family.write(BufWriter::new(File::create(&path).unwrap())).unwrap();

        let image = decode_icns(&path).unwrap();
        assert_eq!(image.dimensions(), (48, 48));
    }

    #[test]
    fn decode_falls_back_when_largest_is_undecodable() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("fallback.icns");
        let mut family = IconFamily::new();
        let icon = icns::Image::new(PixelFormat::RGBA, 32, 32);
        family.add_icon_with_type(&icon, IconType::RGBA32_32x32).unwrap();
        // ic09 為 512x512，內容無法解碼
        family.elements.push(IconElement::new(OSType(*b"ic09"), vec![0x42; 64]));
        family.write(BufWriter::new(File::create(&path).unwrap())).unwrap();

        let image = decode_icns(&path).unwrap();
        assert_eq!(image.dimensions(), (32, 32));
    }

    #[test]
    fn decode_fails_when_no_icon_decodes() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("undecodable.icns");
        let mut family = IconFamily::new();
        family.elements.push(IconElement::new(OSType(*b"ic09"), vec![0x42; 64]));
        family.elements.push(IconElement::new(OSType(*b"ic08"), vec![0x17; 32]));
        family.write(BufWriter::new(File::create(&path).unwrap())).unwrap();

        assert!(matches!(decode_icns(&path), Err(ConvertError::Decode(_))));
    }

    #[test]
    fn decode_rejects_garbage() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.icns");
        fs::write(&path, b"definitely not an icon family").unwrap();
        assert!(matches!(decode_icns(&path), Err(ConvertError::Decode(_))));
    }

    #[test]
    fn decode_reports_empty_family() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("empty.icns");
        IconFamily::new().write(BufWriter::new(File::create(&path).unwrap())).unwrap();
        assert!(matches!(decode_icns(&path), Err(ConvertError::NoIcon)));
    }

    #[test]
    fn convert_file_writes_png_next_to_stem() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("App.icns");
        write_icns(&source, &rgb_icon(32), IconType::RGB24_32x32);
        let file = InputFile {
            path: source.clone(),
            name: "App.icns".to_string(),
            size: fs::metadata(&source).unwrap().len(),
        };

        let service = ImageService::default();
        let result = service.convert_file(&file, tmp.path()).unwrap();

        let output = tmp.path().join("App.png");
        assert!(output.is_file());
        assert_eq!(result.filename, "App.icns");
        assert_eq!(result.original_size, file.size);
        assert_eq!(result.converted_size, fs::metadata(&output).unwrap().len());
        assert!(result.converted_size > 0);
        assert_eq!(image::open(&output).unwrap().dimensions(), (32, 32));
    }
}
