//! Global CSS styles for the portfolio.
//!
//! Both themes share one stylesheet; `.theme-light` on the application shell
//! swaps the custom properties.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.app-shell.theme-dark {
  --bg: #0A0E14;
  --bg-darker: #070A0F;
  --surface: #151922;
  --border: #374151;
  --text-primary: #F9FAFB;
  --text-secondary: #D1D5DB;
  --text-muted: #9CA3AF;
  --glass: rgba(255, 255, 255, 0.08);
  --glass-hover: rgba(255, 255, 255, 0.15);
  --overlay: rgba(10, 14, 20, 0.7);
  --nav-bg: rgba(10, 14, 20, 0.95);
}

.app-shell.theme-light {
  --bg: #F8FAFC;
  --bg-darker: #EEF2F7;
  --surface: #FFFFFF;
  --border: #E2E8F0;
  --text-primary: #0F172A;
  --text-secondary: #334155;
  --text-muted: #64748B;
  --glass: rgba(15, 23, 42, 0.05);
  --glass-hover: rgba(15, 23, 42, 0.1);
  --overlay: rgba(248, 250, 252, 0.75);
  --nav-bg: rgba(248, 250, 252, 0.95);
}

.app-shell {
  --primary: #10B981;
  --primary-dark: #059669;
  --primary-soft: rgba(16, 185, 129, 0.2);
  --danger: #F87171;
  --success: #4ADE80;

  --font-sans: 'Inter', system-ui, sans-serif;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;

  min-height: 100vh;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
  transition: background var(--transition-normal), color var(--transition-normal);
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
  min-height: 100vh;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
}

/* === Animations === */
@keyframes fade-in-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-20px); }
}

@keyframes pop-in {
  from { transform: scale(0); }
  to { transform: scale(1); }
}

.reveal {
  animation: fade-in-up var(--transition-slow) both;
}

.stagger > * {
  animation: fade-in-up 500ms ease both;
}
.stagger > *:nth-child(2) { animation-delay: 100ms; }
.stagger > *:nth-child(3) { animation-delay: 200ms; }
.stagger > *:nth-child(4) { animation-delay: 300ms; }
.stagger > *:nth-child(5) { animation-delay: 400ms; }

/* === Navigation === */
.nav-bar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: var(--nav-bg);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
}

.nav-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo {
  font-size: 1.5rem;
  font-weight: 700;
  transition: color var(--transition-fast);
}

.nav-logo:hover,
.nav-link:hover {
  color: var(--primary);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 2rem;
}

.nav-link {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-link.active {
  color: var(--primary);
}

.nav-tools {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.nav-mobile-tools {
  display: none;
  align-items: center;
  gap: 0.5rem;
}

.mobile-menu {
  display: none;
  background: var(--surface);
  border-top: 1px solid var(--border);
  padding: 0.5rem 1rem 1rem;
}

.mobile-menu .nav-link {
  display: block;
  width: 100%;
  text-align: left;
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
}

.mobile-menu .nav-link.active {
  background: var(--glass);
}

@media (max-width: 767px) {
  .nav-links { display: none; }
  .nav-mobile-tools { display: flex; }
  .mobile-menu.open { display: block; }
}

.icon-btn {
  padding: 0.5rem;
  border-radius: 0.5rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  transition: background var(--transition-fast);
}

.icon-btn:hover {
  background: var(--glass-hover);
}

.language-select {
  appearance: none;
  background: var(--glass);
  color: var(--text-primary);
  border: none;
  border-radius: 0.5rem;
  padding: 0.5rem 2rem 0.5rem 0.75rem;
  font-size: 0.875rem;
  cursor: pointer;
}

.language-select option {
  background: var(--surface);
  color: var(--text-primary);
}

/* === Buttons === */
.btn-primary,
.btn-glass,
.btn-outline {
  padding: 0.875rem 2rem;
  border-radius: 0.5rem;
  font-weight: 500;
  transition: transform var(--transition-fast), background var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-primary {
  background: var(--primary);
  color: #FFFFFF;
}

.btn-primary:hover {
  background: var(--primary-dark);
  box-shadow: 0 0 25px rgba(16, 185, 129, 0.6);
  transform: scale(1.05);
}

.btn-glass {
  background: rgba(255, 255, 255, 0.1);
  border: 2px solid rgba(255, 255, 255, 0.3);
  color: #FFFFFF;
  backdrop-filter: blur(12px);
}

.btn-glass:hover {
  background: rgba(255, 255, 255, 0.3);
  transform: scale(1.05);
}

.btn-outline {
  border: 2px solid var(--primary);
  color: inherit;
}

.btn-outline:hover {
  background: var(--primary-soft);
  transform: scale(1.05);
}

.btn-ghost {
  padding: 0.5rem 1rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
}

.btn-ghost:hover {
  border-color: var(--primary);
}

.btn-primary:active,
.btn-glass:active,
.btn-outline:active {
  transform: scale(0.95);
}

/* === Sections === */
.page-section {
  padding: 5rem 1.5rem;
}

.section-dark { background: var(--bg); }
.section-darker { background: var(--bg-darker); }

.section-inner {
  max-width: 80rem;
  margin: 0 auto;
}

.section-heading {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: 3rem;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding-top: 4rem;
  overflow: hidden;
}

.hero-background {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
  background-repeat: no-repeat;
  animation: fade-in 1s ease both;
}

.hero-overlay {
  position: absolute;
  inset: 0;
  background: var(--overlay);
}

.hero-content {
  position: relative;
  z-index: 1;
  width: 100%;
  max-width: 80rem;
  padding: 3rem 1.5rem;
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 3rem;
}

.hero-photo {
  width: 20rem;
  height: 20rem;
  border-radius: 50%;
  overflow: hidden;
  border: 4px solid var(--primary);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
  animation: fade-in 800ms ease both, float 3s ease-in-out infinite;
}

.hero-photo img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-text {
  flex: 1;
  min-width: 18rem;
}

.hero-greeting { font-size: 3rem; font-weight: 700; }
.hero-name { font-size: 4rem; font-weight: 700; line-height: 1.1; }
.hero-title { font-size: 1.5rem; color: var(--text-secondary); margin-top: 1rem; }
.hero-location { color: var(--text-muted); margin-top: 0.5rem; }

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  padding-top: 2rem;
}

.hero-actions > * {
  animation: pop-in 400ms cubic-bezier(0.34, 1.56, 0.64, 1) both;
}
.hero-actions > *:nth-child(1) { animation-delay: 700ms; }
.hero-actions > *:nth-child(2) { animation-delay: 800ms; }
.hero-actions > *:nth-child(3) { animation-delay: 900ms; }

/* === About === */
.about-bio {
  max-width: 56rem;
  margin-bottom: 3rem;
  color: var(--text-secondary);
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
  gap: 1.5rem;
}

.info-card {
  display: flex;
  gap: 1rem;
  align-items: flex-start;
  padding: 1.5rem;
  border-radius: 0.75rem;
  background: var(--glass);
  border: 1px solid var(--border);
  transition: transform var(--transition-normal), background var(--transition-normal);
}

.info-card:hover {
  transform: translateY(-5px) scale(1.05);
  background: var(--glass-hover);
}

.info-card-icon {
  width: 3rem;
  height: 3rem;
  flex-shrink: 0;
  border-radius: 0.5rem;
  background: var(--primary-soft);
  color: var(--primary);
  display: flex;
  align-items: center;
  justify-content: center;
  transition: transform var(--transition-slow);
}

.info-card:hover .info-card-icon {
  transform: rotate(360deg);
}

.info-card-title { font-size: 0.875rem; color: var(--text-muted); }
.info-card-content { font-size: 1.125rem; font-weight: 600; }

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
  gap: 1.5rem;
  margin-bottom: 5rem;
}

.skill-category {
  padding: 1.5rem;
  border-radius: 0.75rem;
  background: var(--surface);
  border: 1px solid var(--border);
  transition: transform var(--transition-normal);
}

.skill-category:hover {
  transform: translateY(-5px) scale(1.05);
}

.skill-category h3 {
  color: var(--primary);
  margin-bottom: 1rem;
}

.skill-category li {
  list-style: none;
  padding: 0.25rem 0;
  color: var(--text-secondary);
}

/* === Project Cards === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
  gap: 2rem;
}

.project-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  overflow: hidden;
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-10px) scale(1.03);
  border-color: rgba(16, 185, 129, 0.5);
}

.project-image {
  height: 12rem;
  overflow: hidden;
  background: linear-gradient(135deg, var(--primary-soft), rgba(5, 150, 105, 0.2));
}

.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.8;
  transition: transform 400ms ease;
}

.project-card:hover .project-image img {
  transform: scale(1.1);
}

.project-body {
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.project-title { font-size: 1.25rem; font-weight: 700; }
.project-description { font-size: 0.875rem; color: var(--text-muted); }
.project-tech { font-size: 0.875rem; color: var(--text-muted); }
.project-tech strong { color: var(--text-secondary); }

.project-actions {
  display: flex;
  gap: 0.75rem;
  padding-top: 0.5rem;
}

.project-actions .btn-primary {
  flex: 1;
  padding: 0.5rem 1rem;
  font-size: 0.875rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
}

.project-actions .btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 0.875rem;
}

/* === Experience === */
.accomplishments {
  max-width: 42rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.accomplishment {
  list-style: none;
  display: flex;
  gap: 0.75rem;
  align-items: flex-start;
  color: var(--text-secondary);
  transition: transform var(--transition-fast);
}

.accomplishment:hover {
  transform: translateX(10px);
}

.accomplishment svg {
  flex-shrink: 0;
  margin-top: 0.125rem;
  color: var(--primary);
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
  gap: 3rem;
}

.contact-links {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.contact-link {
  display: flex;
  align-items: center;
  gap: 1rem;
  width: 100%;
  text-align: left;
  transition: transform var(--transition-fast), color var(--transition-fast);
}

.contact-link:hover {
  transform: translateX(10px) scale(1.03);
  color: var(--primary);
}

.contact-link-icon {
  width: 3rem;
  height: 3rem;
  border-radius: 0.5rem;
  background: var(--surface);
  border: 1px solid var(--border);
  color: var(--primary);
  display: flex;
  align-items: center;
  justify-content: center;
  transition: border-color var(--transition-fast), transform var(--transition-slow);
}

.contact-link:hover .contact-link-icon {
  border-color: var(--primary);
  transform: rotate(360deg);
}

.contact-link-label { color: var(--text-secondary); }

.contact-form {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.input-field {
  width: 100%;
  padding: 0.75rem 1rem;
  background: var(--bg);
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  font: inherit;
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--primary);
}

.input-field.invalid {
  border-color: var(--danger);
}

.input-field.textarea {
  resize: none;
}

.field-error {
  margin-top: 0.25rem;
  font-size: 0.875rem;
  color: var(--danger);
  animation: fade-in 200ms ease both;
}

.form-status {
  text-align: center;
  animation: fade-in-up 300ms ease both;
}

.form-status.success { color: var(--success); }
.form-status.error { color: var(--danger); }
"#;
