//! Global CSS styles for Ship Yourself Cards.
//!
//! Slide and fade durations match the navigator's timers in
//! `shipcards_core::config`; the flip transition is set inline per card.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --purple: #6E34C8;
  --mint: #A5F3C9;

  --page-bg: #FFFFFF;
  --deck-bg: #F8F8F8;
  --border: #E5E7EB;
  --border-strong: #D1D5DB;
  --selected-fill: #F3F4F6;

  --text-primary: #111111;
  --text-muted: #6B7280;
  --arrow: #454545;

  --font-sans: 'Inter', -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif;

  --card-width: 366px;
  --card-height: 512px;
  --card-radius: 16px;

  --slide-duration: 500ms;
  --fade-duration: 300ms;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--page-bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
}

button {
  font: inherit;
  cursor: pointer;
  background: none;
  border: none;
  color: inherit;
}

/* === Buttons === */
.btn-primary {
  padding: 12px 28px;
  border-radius: 999px;
  background: var(--text-primary);
  color: var(--page-bg);
  font-weight: 600;
}

.btn-outline {
  padding: 12px 28px;
  border-radius: 999px;
  border: 2px solid currentColor;
  font-weight: 600;
  transition: background 150ms ease, color 150ms ease;
}

.btn-outline:hover {
  background: var(--mint);
  color: var(--purple);
  border-color: var(--mint);
}

.btn-ghost {
  padding: 6px 12px;
  border-radius: 8px;
  color: var(--text-muted);
}

.btn-ghost:hover {
  background: var(--selected-fill);
  color: var(--text-primary);
}

button:disabled {
  opacity: 0.4;
  cursor: default;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: 50%;
}

.icon-btn:hover {
  background: var(--selected-fill);
}

.close-btn {
  font-size: 22px;
  line-height: 1;
  color: var(--text-muted);
}

/* === Landing === */
.landing {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--purple);
  color: var(--mint);
  padding: 48px 24px;
}

.landing-inner {
  max-width: 560px;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 28px;
  text-align: center;
}

.landing-welcome {
  font-size: 18px;
  letter-spacing: 0.08em;
  text-transform: uppercase;
}

.landing-title {
  font-size: 48px;
  font-weight: 800;
  line-height: 1.05;
}

.landing-tagline {
  margin-top: 8px;
  font-size: 20px;
}

.landing-copy p {
  font-size: 16px;
  line-height: 1.6;
  margin-bottom: 12px;
}

.landing-credit {
  font-size: 13px;
  opacity: 0.8;
}

/* === Header & Menu === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 16px 24px;
  border-bottom: 1px solid var(--border);
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 10px;
  text-decoration: none;
}

.nav-title {
  font-weight: 700;
  font-size: 18px;
}

.menu-btn {
  flex-direction: column;
  gap: 4px;
}

.menu-bar {
  display: block;
  width: 20px;
  height: 2px;
  background: var(--text-primary);
}

.menu-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.3);
  z-index: 40;
}

.menu-panel {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  width: 300px;
  max-width: 85vw;
  background: var(--page-bg);
  box-shadow: -4px 0 24px rgba(0, 0, 0, 0.12);
  padding: 20px 24px;
  z-index: 50;
  animation: menu-in 200ms ease-out;
}

.menu-panel-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 24px;
}

.menu-panel-title {
  font-weight: 700;
}

.menu-links {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 18px;
}

.menu-links a {
  text-decoration: none;
  font-size: 17px;
}

.menu-links a:hover {
  text-decoration: underline;
}

@keyframes menu-in {
  from { transform: translateX(100%); }
  to { transform: translateX(0); }
}

/* === Cards Page === */
.cards-page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.cards-body {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 24px;
  padding: 24px 16px 32px;
  background: var(--deck-bg);
}

.deck-area {
  width: 100%;
  display: flex;
  justify-content: center;
}

.selector-area {
  width: 100%;
  max-width: 1200px;
}

.deck-status {
  padding: 48px 16px;
  color: var(--text-muted);
  text-align: center;
}

.deck-status.error {
  color: #B91C1C;
}

/* === Category Selector === */
.category-selector {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 8px;
}

.category-selector.scrollable {
  flex-wrap: nowrap;
  justify-content: flex-start;
  overflow-x: auto;
  scrollbar-width: none;
}

.pill {
  flex-shrink: 0;
  padding: 8px 16px;
  border-radius: 999px;
  border: 1px solid var(--border-strong);
  background: var(--page-bg);
  font-size: 14px;
  line-height: 1.2;
  white-space: pre-line;
  transition: background 150ms ease, border-color 150ms ease;
}

.pill:hover {
  border-color: var(--text-primary);
}

.pill.selected {
  background: var(--selected-fill);
  border-color: var(--text-primary);
  font-weight: 600;
}

.shuffle-pill {
  display: inline-flex;
  align-items: center;
  gap: 6px;
}

.shuffle-icon {
  font-size: 16px;
}

/* === Deck === */
.deck-stage {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 16px;
  opacity: 1;
  transition: opacity var(--fade-duration) ease;
}

.deck-stage.fading {
  opacity: 0;
}

.deck-stage.narrow {
  flex-direction: column;
}

.deck-single {
  position: relative;
  width: var(--card-width);
  max-width: calc(100vw - 32px);
  height: var(--card-height);
  touch-action: pan-y;
  user-select: none;
}

.card-stack {
  position: absolute;
  inset: 0;
  border-radius: var(--card-radius);
  opacity: 0.5;
}

.card-stack-1 {
  transform: translate(6px, 6px);
}

.card-stack-2 {
  transform: translate(12px, 12px);
  opacity: 0.3;
}

.deck-slot {
  position: absolute;
  inset: 0;
}

.deck-slot.slide-in {
  animation: slide-in var(--slide-duration) ease-out;
}

.deck-slot.slide-out-left {
  animation: slide-out-left var(--slide-duration) ease-in-out forwards;
}

.deck-slot.slide-out-right {
  animation: slide-out-right var(--slide-duration) ease-in-out forwards;
}

@keyframes slide-in {
  from { opacity: 0; transform: scale(0.97); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes slide-out-left {
  from { transform: translateX(0); opacity: 1; }
  to { transform: translateX(-110%); opacity: 0; }
}

@keyframes slide-out-right {
  from { transform: translateX(0); opacity: 1; }
  to { transform: translateX(110%); opacity: 0; }
}

.deck-strip {
  position: relative;
  height: var(--card-height);
  overflow: hidden;
}

.deck-strip .deck-slot {
  inset: auto;
  top: 0;
  left: 0;
  height: 100%;
  transition: transform var(--slide-duration) ease-in-out;
}

/* === Arrows === */
.deck-arrows {
  display: flex;
  gap: 32px;
  justify-content: center;
}

.deck-arrow {
  width: 48px;
  height: 48px;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  color: var(--arrow);
}

.deck-arrow.disabled {
  opacity: 0.3;
  cursor: default;
}

.arrow-outside-left,
.arrow-outside-right {
  flex-shrink: 0;
}

/* === Card === */
.card-shell {
  width: 100%;
  height: 100%;
  perspective: 1200px;
}

.card-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transform-style: preserve-3d;
  cursor: pointer;
}

.card-face {
  position: absolute;
  inset: 0;
  border-radius: var(--card-radius);
  padding: 28px 24px;
  backface-visibility: hidden;
  -webkit-backface-visibility: hidden;
  box-shadow: 0 6px 24px rgba(0, 0, 0, 0.08);
  display: flex;
  flex-direction: column;
  overflow: hidden;
}

.card-back {
  transform: rotateY(180deg);
  gap: 16px;
  overflow-y: auto;
}

.card-front-top {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.card-category {
  font-size: 14px;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.06em;
}

.card-dot,
.bullet-dot {
  display: inline-block;
  width: 10px;
  height: 10px;
  border-radius: 50%;
  flex-shrink: 0;
}

.card-front-body {
  flex: 1;
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 12px;
}

.card-title {
  font-size: 34px;
  font-weight: 800;
  line-height: 1.1;
}

.card-subtitle {
  font-size: 17px;
  line-height: 1.45;
}

.card-back-title {
  font-size: 22px;
  font-weight: 700;
}

.card-bullets {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 10px;
}

.card-bullets li {
  display: flex;
  align-items: baseline;
  gap: 10px;
  font-size: 15px;
  line-height: 1.45;
}

.card-section h4 {
  font-size: 13px;
  text-transform: uppercase;
  letter-spacing: 0.06em;
  margin-bottom: 6px;
}

.card-link {
  font-weight: 600;
}

.card-quote {
  font-style: italic;
  line-height: 1.45;
}

/* === Share === */
.share-anchor {
  position: relative;
  align-self: flex-start;
}

.share-btn {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  font-weight: 600;
}

.share-menu {
  position: absolute;
  bottom: calc(100% + 8px);
  left: 0;
  width: 300px;
  padding: 16px;
  border-radius: 12px;
  background: var(--page-bg);
  color: var(--text-primary);
  box-shadow: 0 12px 32px rgba(0, 0, 0, 0.18);
  z-index: 30;
  cursor: default;
}

.share-menu-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 12px;
}

.share-menu-header h3 {
  font-size: 15px;
}

.share-preview {
  width: 100%;
  border-radius: 8px;
  margin-bottom: 12px;
  border: 1px solid var(--border);
}

.share-links {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 8px;
  margin-bottom: 12px;
}

.share-link {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 4px;
  text-decoration: none;
  font-size: 11px;
}

.share-link-icon {
  width: 36px;
  height: 36px;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--selected-fill);
  font-weight: 700;
}

.share-copy {
  display: flex;
  align-items: center;
  gap: 8px;
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 4px 4px 4px 10px;
}

.share-url {
  flex: 1;
  font-size: 12px;
  color: var(--text-muted);
  white-space: nowrap;
  overflow: hidden;
}

/* === Responsive === */
@media (max-width: 768px) {
  .landing-title {
    font-size: 36px;
  }

  .card-title {
    font-size: 28px;
  }

  .share-menu {
    width: 260px;
  }
}
"#;
