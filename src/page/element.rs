/// Page elements the player reads or writes, keyed by their DOM ids.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Element {
    /// Static placeholder shown before scripts run.
    LoadingPlaceholder,
    /// Full-screen intro overlay.
    Preloader,
    /// Logo inside the preloader.
    PreloaderLogo,
    /// Site header.
    Header,
    /// Tall section whose scroll drives the frame sequence.
    HeroSection,
    /// Hero copy container.
    HeroContent,
    /// Hero headline.
    HeroTitle,
    /// Hero supporting line.
    HeroSubtitle,
    /// Hero call to action.
    HeroCta,
    /// "Scroll" hint.
    ScrollIndicator,
    /// Progress line inside the scroll hint.
    ScrollLine,
    /// Frame number readout.
    FrameCounter,
    /// Second tracked section.
    SecondSection,
    /// Parallax background of the second section.
    CarBackground,
    /// Foreground image of the second section.
    CarImage,
    /// Content revealed once the image fades out.
    SectionContent,
}

impl Element {
    /// Every element, in document order.
    pub const ALL: [Element; 16] = [
        Element::LoadingPlaceholder,
        Element::Preloader,
        Element::PreloaderLogo,
        Element::Header,
        Element::HeroSection,
        Element::HeroContent,
        Element::HeroTitle,
        Element::HeroSubtitle,
        Element::HeroCta,
        Element::ScrollIndicator,
        Element::ScrollLine,
        Element::FrameCounter,
        Element::SecondSection,
        Element::CarBackground,
        Element::CarImage,
        Element::SectionContent,
    ];

    /// DOM id in the host markup.
    pub const fn dom_id(self) -> &'static str {
        match self {
            Element::LoadingPlaceholder => "loadingPlaceholder",
            Element::Preloader => "preloader",
            Element::PreloaderLogo => "preloaderLogo",
            Element::Header => "header",
            Element::HeroSection => "heroSection",
            Element::HeroContent => "heroContent",
            Element::HeroTitle => "heroTitle",
            Element::HeroSubtitle => "heroSubtitle",
            Element::HeroCta => "heroCta",
            Element::ScrollIndicator => "scrollIndicator",
            Element::ScrollLine => "scrollLine",
            Element::FrameCounter => "currentFrameNumber",
            Element::SecondSection => "secondSection",
            Element::CarBackground => "carBackground",
            Element::CarImage => "carImage",
            Element::SectionContent => "sectionContent",
        }
    }

    /// Look an element up by DOM id.
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.dom_id() == id)
    }

    /// Whether the player refuses to start without this element.
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Element::LoadingPlaceholder
                | Element::Preloader
                | Element::PreloaderLogo
                | Element::Header
                | Element::HeroSection
                | Element::HeroContent
                | Element::HeroTitle
                | Element::HeroSubtitle
                | Element::HeroCta
                | Element::ScrollIndicator
        )
    }
}

/// CSS classes toggled by the player.
pub mod class {
    /// Logo shrinks into the header position.
    pub const SHRINK: &str = "shrink";
    /// Header blends in under the shrinking logo.
    pub const SEAMLESS_TRANSITION: &str = "seamless-transition";
    /// Preloader overlay fades away.
    pub const FADE_OUT: &str = "fade-out";
    /// Generic "shown" state.
    pub const VISIBLE: &str = "visible";
}

/// Style property carrying the scroll-line fill.
pub const SCROLL_PROGRESS_PROPERTY: &str = "--progress";
/// Style property carrying the parallax background position.
pub const BACKGROUND_POSITION_PROPERTY: &str = "background-position";
