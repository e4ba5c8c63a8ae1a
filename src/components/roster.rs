use mpg_api::Player;

/// One roster row: "first last - label". Unknown position codes contribute
/// no label text, matching the upstream app's behavior.
pub fn row_label(player: &Player) -> String {
    format!(
        "{} - {}",
        player.full_name(),
        player.position_label().unwrap_or("")
    )
}

/// Window of the filtered list that keeps the selected row visible in
/// `height` rows. Returns (start, end) indices into the list.
pub fn visible_window(len: usize, selected: usize, height: usize) -> (usize, usize) {
    if height == 0 || len == 0 {
        return (0, 0);
    }
    let start = selected.saturating_sub(height.saturating_sub(1));
    let end = (start + height).min(len);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_reads_name_dash_label() {
        let player = Player {
            id: "1".into(),
            first_name: Some("Lionel".into()),
            last_name: Some("Messi".into()),
            position: 4,
            ultra_position: 40,
            club_id: "321".into(),
        };
        assert_eq!(row_label(&player), "Lionel Messi - Attaquant - A");
    }

    #[test]
    fn unknown_code_leaves_label_empty() {
        let player = Player {
            id: "2".into(),
            first_name: Some("Jean".into()),
            last_name: Some("Dupont".into()),
            position: 4,
            ultra_position: 99,
            club_id: "140".into(),
        };
        assert_eq!(row_label(&player), "Jean Dupont - ");
    }

    #[test]
    fn window_keeps_selection_visible() {
        assert_eq!(visible_window(10, 0, 4), (0, 4));
        assert_eq!(visible_window(10, 3, 4), (0, 4));
        assert_eq!(visible_window(10, 7, 4), (4, 8));
        assert_eq!(visible_window(10, 9, 4), (6, 10));
        assert_eq!(visible_window(2, 0, 4), (0, 2));
        assert_eq!(visible_window(0, 0, 4), (0, 0));
    }
}
