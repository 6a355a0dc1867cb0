// Icon Module
//
// 图标查找模块，采用六边形架构
//
// 层次结构:
// - domain: 搜索计划、图标格式与探测结果
// - ports: 图标来源抽象（目录枚举、探测、解码）
// - infrastructure: 本地文件系统实现

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{IconFormat, IconImage, IconPattern, IconSearchPlan, ProbeOutcome, ICON_NAMES};
pub use infrastructure::FsIconSource;
pub use ports::{IconError, IconSource};

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 查找结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIcon {
    pub path: PathBuf,
    /// 是否使用了内置兜底图标
    pub is_fallback: bool,
}

/// 图标查找器
///
/// 永不失败：所有候选都不可用时返回内置兜底路径
pub struct IconResolver {
    source: Arc<dyn IconSource>,
    plan: IconSearchPlan,
    fallback: PathBuf,
}

impl IconResolver {
    /// 使用本地文件系统创建
    pub fn new(home_dir: Option<&Path>, fallback: PathBuf) -> Self {
        Self::with_source(
            Arc::new(FsIconSource::new()),
            IconSearchPlan::new(home_dir),
            fallback,
        )
    }

    /// 使用自定义来源创建
    pub fn with_source(source: Arc<dyn IconSource>, plan: IconSearchPlan, fallback: PathBuf) -> Self {
        Self {
            source,
            plan,
            fallback,
        }
    }

    /// 按优先级查找第一个可用图标
    pub fn resolve(&self) -> ResolvedIcon {
        let dirs = self.plan.candidate_dirs(
            |path| self.source.is_dir(path),
            |path| self.source.subdirectories(path),
        );

        for candidate in self.plan.candidates(&dirs) {
            match self.source.probe(&candidate) {
                ProbeOutcome::Usable => {
                    tracing::info!("Using icon {}", candidate.display());
                    return ResolvedIcon {
                        path: candidate,
                        is_fallback: false,
                    };
                }
                ProbeOutcome::Undecodable => {
                    tracing::debug!("Skipping undecodable icon {}", candidate.display());
                }
                ProbeOutcome::Missing => {}
            }
        }

        tracing::info!(
            "No themed icon found in {} directories, using bundled {}",
            dirs.len(),
            self.fallback.display()
        );
        ResolvedIcon {
            path: self.fallback.clone(),
            is_fallback: true,
        }
    }

    /// 查找并加载图标，加载失败返回 None
    pub fn resolve_image(&self) -> (ResolvedIcon, Option<IconImage>) {
        let resolved = self.resolve();
        let image = match self.source.load(&resolved.path) {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::warn!("Failed to load icon {}: {}", resolved.path.display(), e);
                None
            }
        };
        (resolved, image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// 内存图标来源：路径 -> 探测结果
    #[derive(Default)]
    struct FakeIconSource {
        dirs: HashMap<PathBuf, Vec<PathBuf>>,
        files: HashMap<PathBuf, ProbeOutcome>,
        probed: Mutex<Vec<PathBuf>>,
    }

    impl FakeIconSource {
        fn with_dir(mut self, dir: &str, subdirs: &[&str]) -> Self {
            self.dirs.insert(
                PathBuf::from(dir),
                subdirs.iter().map(PathBuf::from).collect(),
            );
            for sub in subdirs {
                self.dirs.entry(PathBuf::from(sub)).or_default();
            }
            self
        }

        fn with_file(mut self, path: &str, outcome: ProbeOutcome) -> Self {
            self.files.insert(PathBuf::from(path), outcome);
            self
        }
    }

    impl IconSource for FakeIconSource {
        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.contains_key(path)
        }

        fn subdirectories(&self, path: &Path) -> Vec<PathBuf> {
            self.dirs.get(path).cloned().unwrap_or_default()
        }

        fn probe(&self, path: &Path) -> ProbeOutcome {
            self.probed.lock().unwrap().push(path.to_path_buf());
            self.files.get(path).copied().unwrap_or(ProbeOutcome::Missing)
        }

        fn load(&self, path: &Path) -> Result<IconImage, IconError> {
            match self.files.get(path) {
                Some(ProbeOutcome::Usable) => Ok(IconImage::new(vec![0; 4 * 32 * 32], 32, 32)),
                _ => Err(IconError::NotFound(path.display().to_string())),
            }
        }
    }

    fn resolver(source: FakeIconSource, roots: &[&str]) -> IconResolver {
        IconResolver::with_source(
            Arc::new(source),
            IconSearchPlan::new(None).with_roots(roots.iter().map(PathBuf::from).collect()),
            PathBuf::from("/bundle/icons/icon.png"),
        )
    }

    #[test]
    fn test_resolve_falls_back_when_nothing_matches() {
        let source = FakeIconSource::default().with_dir("/usr/share/icons", &["/usr/share/icons/hicolor"]);
        let resolved = resolver(source, &["/usr/share/icons", "/missing"]).resolve();

        assert!(resolved.is_fallback);
        assert_eq!(resolved.path, PathBuf::from("/bundle/icons/icon.png"));
    }

    #[test]
    fn test_resolve_falls_back_when_no_root_exists() {
        let resolved = resolver(FakeIconSource::default(), &["/nowhere"]).resolve();
        assert!(resolved.is_fallback);
    }

    #[test]
    fn test_resolve_prefers_pattern_order_over_directory_order() {
        // 48x48/apps 出现在更靠前的目录中，但 32x32/tray 的模式优先级更高
        let source = FakeIconSource::default()
            .with_dir("/icons", &["/icons/hicolor"])
            .with_file("/icons/48x48/apps/whatsapp.png", ProbeOutcome::Usable)
            .with_file("/icons/hicolor/32x32/tray/whatsapp-tray.png", ProbeOutcome::Usable);

        let resolved = resolver(source, &["/icons"]).resolve();
        assert!(!resolved.is_fallback);
        assert_eq!(
            resolved.path,
            PathBuf::from("/icons/hicolor/32x32/tray/whatsapp-tray.png")
        );
    }

    #[test]
    fn test_resolve_skips_undecodable_candidates() {
        let source = FakeIconSource::default()
            .with_dir("/icons", &[])
            .with_file("/icons/32x32/apps/whatsapp.png", ProbeOutcome::Undecodable)
            .with_file("/icons/32x32/apps/whatsapp-web.png", ProbeOutcome::Usable);

        let resolved = resolver(source, &["/icons"]).resolve();
        assert_eq!(resolved.path, PathBuf::from("/icons/32x32/apps/whatsapp-web.png"));
    }

    #[test]
    fn test_resolve_stops_probing_after_first_match() {
        let source = Arc::new(
            FakeIconSource::default()
                .with_dir("/icons", &[])
                .with_file("/icons/32x32/apps/whatsapp.png", ProbeOutcome::Usable),
        );
        let resolver = IconResolver::with_source(
            source.clone(),
            IconSearchPlan::new(None).with_roots(vec![PathBuf::from("/icons")]),
            PathBuf::from("/fallback.png"),
        );

        resolver.resolve();
        assert_eq!(source.probed.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_resolve_image_returns_none_when_fallback_cannot_load() {
        let (resolved, image) = resolver(FakeIconSource::default(), &[]).resolve_image();
        assert!(resolved.is_fallback);
        assert!(image.is_none());
    }
}
