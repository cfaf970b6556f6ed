//! Global CSS styles for the portfolio page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --ink: #10151c;
  --ink-raised: #18202b;
  --ink-border: #263241;

  /* Accent (success, links, focus) */
  --accent: #3ecf8e;
  --accent-glow: rgba(62, 207, 142, 0.3);

  /* Gold (warnings, highlights) */
  --gold: #e0b84f;

  /* Text */
  --text-primary: #f2f4f7;
  --text-secondary: rgba(242, 244, 247, 0.72);
  --text-muted: rgba(242, 244, 247, 0.5);

  --scrim: rgba(5, 8, 12, 0.85);

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-reveal: 700ms cubic-bezier(0.2, 0.7, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--ink);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

a {
  color: var(--accent);
  text-decoration: none;
}

a:hover,
a:focus-visible {
  text-decoration: underline;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: clamp(2.2rem, 6vw, 3.6rem);
  font-weight: 700;
}

.section-header {
  font-family: var(--font-serif);
  font-size: 2rem;
  margin-bottom: 1rem;
  color: var(--gold);
}

.body-text {
  color: var(--text-secondary);
  max-width: 60ch;
}

/* === Hero & typed text === */
.hero {
  min-height: 80vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 1.25rem;
  padding: 4rem 8vw;
  background: radial-gradient(circle at 20% 20%, var(--ink-raised), var(--ink) 70%);
}

.typed-line {
  font-size: 1.25rem;
  min-height: 2.2em;
  color: var(--text-secondary);
}

.typed-caret {
  color: var(--accent);
  margin-left: 2px;
  animation: caret-blink 1s steps(1) infinite;
}

@keyframes caret-blink {
  50% { opacity: 0; }
}

.hero-nav {
  display: flex;
  flex-wrap: wrap;
  gap: 1.5rem;
}

/* === Sections & reveal === */
.section {
  padding: 4.5rem 8vw;
}

.reveal {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal.visible {
  opacity: 1;
  transform: none;
}

@media (prefers-reduced-motion: reduce) {
  .reveal { transition: none; transform: none; }
  .typed-caret { animation: none; }
}

.restaurant {
  background: var(--ink-raised);
}

/* === Cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1.5rem;
}

.project-card,
.cert-card {
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-radius: 12px;
  padding: 1.5rem;
  cursor: pointer;
  transition: border-color var(--transition-fast), transform var(--transition-fast);
}

.project-card:hover,
.cert-card:hover,
.project-card:focus-visible,
.cert-card:focus-visible {
  border-color: var(--accent);
  transform: translateY(-3px);
  outline: none;
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.cert-card.flipped {
  border-color: var(--gold);
}

.cert-issuer {
  font-weight: 600;
}

.cert-year {
  color: var(--text-muted);
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: none;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  background: var(--scrim);
}

.lightbox.show {
  display: flex;
}

.lightbox-content {
  position: relative;
  max-width: 720px;
  width: 100%;
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-radius: 14px;
  padding: 2.5rem 2rem 1.5rem;
}

.lightbox-title {
  font-family: var(--font-serif);
  font-size: 1.6rem;
  margin-bottom: 0.75rem;
}

.lightbox-summary {
  color: var(--text-secondary);
  margin-bottom: 0.75rem;
}

.lightbox-hint {
  margin-top: 1.5rem;
  font-size: 0.8rem;
  color: var(--text-muted);
}

/* === Buttons === */
.btn-primary,
.btn-ghost,
.icon-btn {
  font: inherit;
  cursor: pointer;
  border-radius: 8px;
  transition: background var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  color: var(--ink);
  border: none;
  padding: 0.7rem 1.4rem;
  font-weight: 600;
}

.btn-ghost {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--ink-border);
  padding: 0.7rem 1.4rem;
}

.btn-primary:focus-visible,
.btn-ghost:focus-visible,
.icon-btn:focus-visible {
  outline: none;
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.icon-btn {
  background: var(--ink-raised);
  color: var(--text-primary);
  border: 1px solid var(--ink-border);
  width: 2.5rem;
  height: 2.5rem;
  font-size: 1.25rem;
  line-height: 1;
}

.close-btn {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
}

.back-to-top {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 40;
}

/* === Forms === */
.page-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  max-width: 640px;
}

.form-row {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
  gap: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.input-field {
  font: inherit;
  background: var(--ink);
  color: var(--text-primary);
  border: 1px solid var(--ink-border);
  border-radius: 8px;
  padding: 0.65rem 0.8rem;
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.textarea {
  resize: vertical;
}

.form-feedback {
  min-height: 1.5em;
  font-size: 0.95rem;
}

/* === Cookie banner === */
.cookie-banner {
  position: fixed;
  left: 1rem;
  right: 1rem;
  bottom: 1rem;
  z-index: 60;
  display: none;
  max-width: 720px;
  margin: 0 auto;
  padding: 1.25rem 1.5rem;
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-radius: 12px;
  box-shadow: 0 12px 32px rgba(0, 0, 0, 0.4);
}

.cookie-actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 0.9rem;
}

/* === Footer / not found === */
.site-footer {
  padding: 2rem 8vw;
  color: var(--text-muted);
  border-top: 1px solid var(--ink-border);
}

.not-found {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  justify-content: center;
  gap: 1rem;
  padding: 0 8vw;
}
"#;
