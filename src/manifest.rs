//! The fixed list of icons an iOS AppIcon set needs
//!
//! Each entry maps an output filename to the edge length in pixels the source
//! image is resampled to. Order matches the asset catalog layout: iPhone slots
//! first, then iPad.

/// Device class an icon slot targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    Phone,
    Tablet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub filename: &'static str,
    pub size: u32,
    pub idiom: Idiom,
}

const fn icon(filename: &'static str, size: u32, idiom: Idiom) -> IconSpec {
    IconSpec { filename, size, idiom }
}

const IOS_ICONS: [IconSpec; 17] = [
    // iPhone
    icon("icon_20x20@2x.png", 40, Idiom::Phone),
    icon("icon_20x20@3x.png", 60, Idiom::Phone),
    icon("icon_29x29@2x.png", 58, Idiom::Phone),
    icon("icon_29x29@3x.png", 87, Idiom::Phone),
    icon("icon_40x40@2x.png", 80, Idiom::Phone),
    icon("icon_40x40@3x.png", 120, Idiom::Phone),
    icon("icon_60x60@2x.png", 120, Idiom::Phone),
    icon("icon_60x60@3x.png", 180, Idiom::Phone),
    // iPad
    icon("icon_20x20.png", 20, Idiom::Tablet),
    icon("icon_20x20@2x-ipad.png", 40, Idiom::Tablet),
    icon("icon_29x29.png", 29, Idiom::Tablet),
    icon("icon_29x29@2x-ipad.png", 58, Idiom::Tablet),
    icon("icon_40x40.png", 40, Idiom::Tablet),
    icon("icon_40x40@2x-ipad.png", 80, Idiom::Tablet),
    icon("icon_76x76.png", 76, Idiom::Tablet),
    icon("icon_76x76@2x.png", 152, Idiom::Tablet),
    icon("icon_83.5x83.5@2x.png", 167, Idiom::Tablet),
];

/// Ordered set of icon slots
#[derive(Debug, Clone)]
pub struct Manifest {
    entries: Vec<IconSpec>,
}

impl Manifest {
    /// The 17 iPhone and iPad slots of a standard AppIcon set
    pub fn ios() -> Self {
        Manifest {
            entries: IOS_ICONS.to_vec(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconSpec> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, filename: &str) -> Option<&IconSpec> {
        self.entries.iter().find(|spec| spec.filename == filename)
    }

    /// Largest edge length requested; the source should be at least this big
    pub fn max_size(&self) -> Option<u32> {
        self.entries.iter().map(|spec| spec.size).max()
    }

    pub fn by_idiom(&self, idiom: Idiom) -> impl Iterator<Item = &IconSpec> {
        self.entries.iter().filter(move |spec| spec.idiom == idiom)
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a IconSpec;
    type IntoIter = std::slice::Iter<'a, IconSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ios_manifest_has_all_slots() {
        let manifest = Manifest::ios();
        assert_eq!(manifest.len(), 17);
        assert!(!manifest.is_empty());
    }

    #[test]
    fn test_filenames_are_unique() {
        let manifest = Manifest::ios();
        let names: HashSet<_> = manifest.iter().map(|spec| spec.filename).collect();
        assert_eq!(names.len(), manifest.len());
    }

    #[test]
    fn test_order_is_phone_then_tablet() {
        let manifest = Manifest::ios();
        let first = manifest.iter().next().unwrap();
        let last = manifest.iter().last().unwrap();
        assert_eq!(first.filename, "icon_20x20@2x.png");
        assert_eq!(last.filename, "icon_83.5x83.5@2x.png");

        let idioms: Vec<_> = manifest.iter().map(|spec| spec.idiom).collect();
        let first_tablet = idioms.iter().position(|i| *i == Idiom::Tablet).unwrap();
        assert!(idioms[first_tablet..].iter().all(|i| *i == Idiom::Tablet));
    }

    #[test]
    fn test_idiom_counts() {
        let manifest = Manifest::ios();
        assert_eq!(manifest.by_idiom(Idiom::Phone).count(), 8);
        assert_eq!(manifest.by_idiom(Idiom::Tablet).count(), 9);
    }

    #[test]
    fn test_lookup_by_filename() {
        let manifest = Manifest::ios();
        assert_eq!(manifest.get("icon_60x60@3x.png").map(|s| s.size), Some(180));
        assert_eq!(manifest.get("icon_83.5x83.5@2x.png").map(|s| s.size), Some(167));
        assert!(manifest.get("icon_1024x1024.png").is_none());
    }

    #[test]
    fn test_sizes_fit_marketing_icon() {
        let manifest = Manifest::ios();
        assert_eq!(manifest.max_size(), Some(180));
        assert!(manifest.iter().all(|spec| spec.size > 0 && spec.size <= 1024));
    }
}
