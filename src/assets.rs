//! Embedded assets for Block Catalog
//!
//! Uses rust-embed to bundle icons at compile time. Glyphs are referenced by
//! name through [`Glyph`] and resolved to an SVG path here.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Our glyphs shadow component assets of the same name
        if let Some(f) = Self::get(path) {
            return Ok(Some(f.data));
        }
        ComponentAssets::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            ComponentAssets::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Opaque glyph tokens used by blocks and status tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Activity,
    AlertTriangle,
    Archive,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    BarChart,
    Briefcase,
    Calendar,
    Check,
    CheckCircle,
    ChevronDown,
    ChevronRight,
    Circle,
    Clock,
    CreditCard,
    ExternalLink,
    Gift,
    Heart,
    LayoutGrid,
    Loader,
    Lock,
    Mail,
    MapPin,
    MessageSquare,
    Minus,
    Package,
    Pause,
    Play,
    Plug,
    Plus,
    RotateCcw,
    Settings,
    Shield,
    ShoppingCart,
    Sparkles,
    Star,
    Ticket,
    Trash,
    Truck,
    User,
    WifiOff,
    X,
    XCircle,
    Zap,
}

impl Glyph {
    /// Get the SVG path for this glyph
    pub fn path(self) -> SharedString {
        match self {
            Glyph::Activity => "icons/activity.svg",
            Glyph::AlertTriangle => "icons/alert-triangle.svg",
            Glyph::Archive => "icons/archive.svg",
            Glyph::ArrowDown => "icons/arrow-down.svg",
            Glyph::ArrowLeft => "icons/arrow-left.svg",
            Glyph::ArrowRight => "icons/arrow-right.svg",
            Glyph::ArrowUp => "icons/arrow-up.svg",
            Glyph::BarChart => "icons/bar-chart.svg",
            Glyph::Briefcase => "icons/briefcase.svg",
            Glyph::Calendar => "icons/calendar.svg",
            Glyph::Check => "icons/check.svg",
            Glyph::CheckCircle => "icons/check-circle.svg",
            Glyph::ChevronDown => "icons/chevron-down.svg",
            Glyph::ChevronRight => "icons/chevron-right.svg",
            Glyph::Circle => "icons/circle.svg",
            Glyph::Clock => "icons/clock.svg",
            Glyph::CreditCard => "icons/credit-card.svg",
            Glyph::ExternalLink => "icons/external-link.svg",
            Glyph::Gift => "icons/gift.svg",
            Glyph::Heart => "icons/heart.svg",
            Glyph::LayoutGrid => "icons/layout-grid.svg",
            Glyph::Loader => "icons/loader.svg",
            Glyph::Lock => "icons/lock.svg",
            Glyph::Mail => "icons/mail.svg",
            Glyph::MapPin => "icons/map-pin.svg",
            Glyph::MessageSquare => "icons/message-square.svg",
            Glyph::Minus => "icons/minus.svg",
            Glyph::Package => "icons/package.svg",
            Glyph::Pause => "icons/pause.svg",
            Glyph::Play => "icons/play.svg",
            Glyph::Plug => "icons/plug.svg",
            Glyph::Plus => "icons/plus.svg",
            Glyph::RotateCcw => "icons/rotate-ccw.svg",
            Glyph::Settings => "icons/settings.svg",
            Glyph::Shield => "icons/shield.svg",
            Glyph::ShoppingCart => "icons/shopping-cart.svg",
            Glyph::Sparkles => "icons/sparkles.svg",
            Glyph::Star => "icons/star.svg",
            Glyph::Ticket => "icons/ticket.svg",
            Glyph::Trash => "icons/trash.svg",
            Glyph::Truck => "icons/truck.svg",
            Glyph::User => "icons/user.svg",
            Glyph::WifiOff => "icons/wifi-off.svg",
            Glyph::X => "icons/x.svg",
            Glyph::XCircle => "icons/x-circle.svg",
            Glyph::Zap => "icons/zap.svg",
        }
        .into()
    }
}

impl From<Glyph> for Icon {
    fn from(val: Glyph) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::navigation::BlockId;

    #[test]
    fn block_glyphs_are_embedded() {
        for block in BlockId::all() {
            let path = block.glyph().path();
            assert!(Assets::get(&path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn control_glyphs_are_embedded() {
        for glyph in [
            Glyph::ArrowLeft,
            Glyph::Check,
            Glyph::ChevronDown,
            Glyph::ChevronRight,
            Glyph::Minus,
            Glyph::Plus,
            Glyph::Trash,
            Glyph::X,
        ] {
            assert!(Assets::get(&glyph.path()).is_some());
        }
    }
}
