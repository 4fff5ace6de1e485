//! Modal overlays: full menu, gallery carousel, and the single-image viewer.
//!
//! Each overlay is an independent open/closed flag. Any number can be open at
//! once; the page never does that on purpose, but nothing forbids it.
//!
//! Background scrolling is suspended through one shared [`ScrollLock`] that
//! counts open overlays. The count only moves on real transitions, so opening
//! an open overlay or closing a closed one cannot leak or double-release the
//! lock.

use serde::Serialize;

/// The three overlays on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayKind {
    FullMenu,
    Gallery,
    ImageViewer,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 3] = [
        OverlayKind::FullMenu,
        OverlayKind::Gallery,
        OverlayKind::ImageViewer,
    ];

    /// DOM id of the overlay's backdrop element.
    pub fn id(self) -> &'static str {
        match self {
            OverlayKind::FullMenu => "full-menu",
            OverlayKind::Gallery => "gallery-carousel",
            OverlayKind::ImageViewer => "image-viewer",
        }
    }

    /// Accessible label for the dialog.
    pub fn label(self) -> &'static str {
        match self {
            OverlayKind::FullMenu => "Menú completo",
            OverlayKind::Gallery => "Galería de imágenes",
            OverlayKind::ImageViewer => "Imagen ampliada",
        }
    }
}

/// Visibility of a single overlay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    open: bool,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` if the overlay was closed before.
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    /// Returns `true` if the overlay was open before.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Flip visibility and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

/// Where a pointer interaction inside an open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The dimmed area around the dialog, and nothing inside it.
    Backdrop,
    /// Anything inside the dialog panel.
    Content,
    CloseButton,
}

impl HitTarget {
    pub fn dismisses(self) -> bool {
        matches!(self, HitTarget::Backdrop | HitTarget::CloseButton)
    }
}

/// Page-wide scroll suspension, held while any overlay is open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLock {
    holders: usize,
}

impl ScrollLock {
    pub fn acquire(&mut self) {
        self.holders += 1;
    }

    pub fn release(&mut self) {
        self.holders = self.holders.saturating_sub(1);
    }

    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }

    pub fn holders(&self) -> usize {
        self.holders
    }
}

/// All three overlays plus the scroll lock they share.
#[derive(Debug, Default, Clone)]
pub struct Overlays {
    full_menu: Overlay,
    gallery: Overlay,
    image_viewer: Overlay,
    scroll_lock: ScrollLock,
}

impl Overlays {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: OverlayKind) -> &Overlay {
        match kind {
            OverlayKind::FullMenu => &self.full_menu,
            OverlayKind::Gallery => &self.gallery,
            OverlayKind::ImageViewer => &self.image_viewer,
        }
    }

    fn slot_mut(&mut self, kind: OverlayKind) -> &mut Overlay {
        match kind {
            OverlayKind::FullMenu => &mut self.full_menu,
            OverlayKind::Gallery => &mut self.gallery,
            OverlayKind::ImageViewer => &mut self.image_viewer,
        }
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.slot(kind).is_open()
    }

    /// Open `kind`. Returns `false` if it was already open.
    pub fn open(&mut self, kind: OverlayKind) -> bool {
        let changed = self.slot_mut(kind).open();
        if changed {
            self.scroll_lock.acquire();
            log::debug!("overlay {} opened", kind.id());
        }
        changed
    }

    /// Close `kind`. Returns `false` if it was already closed.
    pub fn close(&mut self, kind: OverlayKind) -> bool {
        let changed = self.slot_mut(kind).close();
        if changed {
            self.scroll_lock.release();
            log::debug!("overlay {} closed", kind.id());
        }
        changed
    }

    /// Flip `kind` and return its new visibility.
    pub fn toggle(&mut self, kind: OverlayKind) -> bool {
        if self.is_open(kind) {
            self.close(kind);
            false
        } else {
            self.open(kind);
            true
        }
    }

    /// Open overlays, in [`OverlayKind::ALL`] order.
    pub fn open_kinds(&self) -> Vec<OverlayKind> {
        OverlayKind::ALL
            .into_iter()
            .filter(|k| self.is_open(*k))
            .collect()
    }

    pub fn any_open(&self) -> bool {
        OverlayKind::ALL.into_iter().any(|k| self.is_open(k))
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn scroll_lock(&self) -> ScrollLock {
        self.scroll_lock
    }
}
