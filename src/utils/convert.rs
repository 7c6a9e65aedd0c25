use std::io;
use std::path::PathBuf;
use crate::config::ports::{AppConfig, ConversionPort};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionInput, ConversionOutput};
use crate::service::file::FileService;
use crate::service::image::ImageService;

// 轉換執行適配器，將配置轉為 Facade 的輸入
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput> {
        let facade: Box<dyn ConversionFacadeTrait> = Box::new(ConversionFacade::new(
            Box::new(FileService::new()),
            Box::new(ImageService::new(config.format)),
        ));

        facade.execute_conversion(ConversionInput {
            input_dir: PathBuf::from(&config.input),
            output_dir: PathBuf::from(&config.output),
            format: config.format,
            no_progress: config.no_progress,
        })
    }
}
