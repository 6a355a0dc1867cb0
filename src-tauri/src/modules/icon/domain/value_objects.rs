// Icon Value Objects
//
// 图标相关的值对象定义

use image::{imageops, imageops::FilterType, RgbaImage};
use serde::{Deserialize, Serialize};

/// 图标文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconFormat {
    Png,
    Svg,
}

impl IconFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            IconFormat::Png => "png",
            IconFormat::Svg => "svg",
        }
    }

    /// 按扩展名识别格式
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(IconFormat::Png),
            "svg" => Some(IconFormat::Svg),
            _ => None,
        }
    }
}

/// 搜索模式：`<dir>/<size_dir>/<subfolder>/<name>.<ext>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconPattern {
    pub format: IconFormat,
    pub size_dir: String,
    pub subfolder: String,
}

impl IconPattern {
    pub fn new(format: IconFormat, size_dir: impl Into<String>, subfolder: impl Into<String>) -> Self {
        Self {
            format,
            size_dir: size_dir.into(),
            subfolder: subfolder.into(),
        }
    }

    pub fn file_name(&self, app_name: &str) -> String {
        format!("{}.{}", app_name, self.format.extension())
    }
}

/// 单个候选路径的探测结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 文件存在且能解码为非空图像
    Usable,
    /// 文件不存在或不可读
    Missing,
    /// 文件存在但无法解码
    Undecodable,
}

/// 解码后的 RGBA 图像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl IconImage {
    pub fn new(rgba: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            rgba,
            width,
            height,
        }
    }

    /// 1x1 全透明占位图
    pub fn placeholder() -> Self {
        Self::new(vec![0; 4], 1, 1)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.rgba.is_empty()
    }

    /// 任一边大于 `max` 时缩放为 `max x max`，否则原样返回
    pub fn fit_within(self, max: u32) -> Self {
        if self.width <= max && self.height <= max {
            return self;
        }

        let Some(source) = RgbaImage::from_raw(self.width, self.height, self.rgba.clone()) else {
            tracing::warn!(
                "Icon buffer does not match {}x{}, keeping original size",
                self.width,
                self.height
            );
            return self;
        };

        let resized = imageops::resize(&source, max, max, FilterType::Lanczos3);
        Self::new(resized.into_raw(), max, max)
    }
}
