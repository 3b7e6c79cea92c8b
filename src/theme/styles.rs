//! Global CSS styles for OneDiary.
//!
//! Dark feed with notebook-paper cards; values mirror theme/colors.rs.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --screen-black: #000;
  --card-dark: #1a1a1a;

  --paper: #eee;
  --paper-border: #e0e0e0;
  --hole: #ddd;
  --ring-arm: #bbb;

  --text-white: #fff;
  --text-muted: #888;
  --text-ink: #333;
  --text-body: #444;
  --text-counter: #666;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  font-family: -apple-system, "Hiragino Sans", "Noto Sans JP", sans-serif;
  background: var(--screen-black);
  color: var(--text-white);
}

/* === Screen === */
.screen {
  position: relative;
  height: 100vh;
  padding: 16px;
  background: var(--screen-black);
  display: flex;
  flex-direction: column;
}

.app-title {
  position: absolute;
  top: 50px;
  left: 0;
  right: 0;
  z-index: 1;
  text-align: center;
  font-size: 23px;
  font-weight: 700;
  color: var(--text-white);
  text-shadow: 1px 1px 3px rgba(83, 83, 83, 0.6);
  pointer-events: none;
}

/* === Loading Indicator === */
.loading-wrap {
  flex: 1;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  padding-top: 100px;
}

.loading-dots {
  display: flex;
  align-items: center;
  gap: 8px;
}

.loading-dot {
  width: 8px;
  height: 8px;
  border-radius: 4px;
  background: var(--text-white);
}

.loading-label {
  margin-top: 20px;
  font-size: 16px;
  color: var(--text-white);
}

/* === Feed === */
.feed-scroll {
  flex: 1;
  overflow-y: auto;
  padding-top: 100px;
}

/* === Diary Card === */
.diary-card {
  display: flex;
  flex-direction: column;
  gap: 10px;
  margin-bottom: 20px;
  padding: 16px;
  border-radius: 12px;
  background: var(--card-dark);
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.2);
  overflow: hidden;
}

.card-user-row {
  display: flex;
  align-items: center;
  gap: 10px;
}

.card-avatar {
  width: 16px;
  height: 16px;
  border-radius: 50%;
  background: var(--text-muted);
  flex-shrink: 0;
}

.card-user {
  font-size: 15px;
  font-weight: 600;
  color: var(--text-white);
}

.card-meta {
  font-size: 12px;
  color: var(--text-muted);
}

/* === Notebook Page === */
.notebook {
  display: flex;
  gap: 12px;
  padding: 16px;
  border: 1px solid var(--paper-border);
  border-radius: 2px;
  background: var(--paper);
  box-shadow: 0 1px 6px rgba(0, 0, 0, 0.1);
}

.notebook-holes {
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  align-items: center;
  width: 16px;
  padding: 12px 0;
}

.notebook-hole {
  position: relative;
  width: 10px;
  height: 10px;
  border-radius: 5px;
  background: var(--hole);
}

.notebook-ring {
  position: absolute;
  left: 10px;
  top: 4px;
  width: 6px;
  height: 2px;
  background: var(--ring-arm);
}

.notebook-page {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 10px;
}

.card-title {
  font-size: 17px;
  font-weight: 700;
  color: var(--text-ink);
}

.entry-block {
  display: flex;
  flex-direction: column;
  gap: 6px;
  padding-top: 10px;
  border-top: 1px solid var(--text-ink);
}

.entry-image {
  width: 100%;
  height: 200px;
  border-radius: 6px;
  object-fit: cover;
}

.entry-comment {
  font-size: 15px;
  line-height: 22px;
  color: var(--text-body);
  white-space: pre-line;
}

/* === Counters === */
.card-counters {
  display: flex;
  gap: 16px;
  margin-top: 4px;
}

.card-counter {
  font-size: 12px;
  color: var(--text-counter);
}
"#;
