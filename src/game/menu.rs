use crate::board::GlyphCatalog;
use crate::constants::{alphabet::LETTERS, menu};
use crate::world::{BlockRef, HeadProfile};

/// One selector button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    pub slot: usize,
    pub label: String,
    /// Glyph head shown on the button, `None` for the close button
    pub icon: Option<HeadProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Letter(char),
    Close,
}

/// 26-letter selector opened for a clicked board slot
///
/// Slots 0-25 hold `A`-`Z`, slot 26 closes the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMenu {
    clicked: BlockRef,
}

impl LetterMenu {
    pub fn new(clicked: BlockRef) -> Self {
        Self { clicked }
    }

    /// Board slot the menu was opened from
    pub fn clicked(&self) -> &BlockRef {
        &self.clicked
    }

    pub fn size(&self) -> usize {
        menu::SIZE
    }

    pub fn buttons(&self) -> Vec<MenuButton> {
        let mut buttons: Vec<MenuButton> = LETTERS
            .iter()
            .enumerate()
            .map(|(slot, letter)| MenuButton {
                slot,
                label: letter.to_string(),
                icon: GlyphCatalog::get(*letter).map(|g| g.profile()),
            })
            .collect();
        buttons.push(MenuButton {
            slot: menu::CLOSE_SLOT,
            label: menu::CLOSE_LABEL.to_string(),
            icon: None,
        });
        buttons
    }

    pub fn select(&self, slot: usize) -> Option<MenuChoice> {
        if slot == menu::CLOSE_SLOT {
            return Some(MenuChoice::Close);
        }
        LETTERS.get(slot).map(|letter| MenuChoice::Letter(*letter))
    }
}
