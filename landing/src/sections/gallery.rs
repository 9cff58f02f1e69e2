//! Photo carousel for the "Our Work in Action" section.
//!
//! Navigation comes from three places (arrow buttons, thumbnails, the
//! left/right arrow keys) and all of them go through [`Carousel`], so the
//! index can never leave the gallery. A broken image is swapped for a
//! placeholder in both the main stage and its thumbnail.

use leptos::ev;
use leptos::prelude::*;
use loadmovers_core::content::GALLERY_SECTION;
use loadmovers_core::{Carousel, GalleryImage, NavKey, SiteConfig};

use crate::components::{ICON_CHEVRON_LEFT, ICON_CHEVRON_RIGHT, ICON_PHOTO, Icon, SectionWrapper};

const NAV_BUTTON: &str = "absolute top-1/2 -translate-y-1/2 bg-white/90 hover:bg-white text-gray-800 p-3 rounded-full shadow-lg transition-all duration-200 hover:scale-110 focus:outline-none focus:ring-2 focus:ring-blue-500 z-10";

#[component]
pub fn Gallery() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    let carousel = match Carousel::new(config.gallery) {
        Ok(carousel) => RwSignal::new(carousel),
        Err(e) => {
            tracing::warn!(error = %e, "gallery section skipped");
            return ().into_any();
        }
    };

    // One listener per mounted carousel, removed when it unmounts
    let keys = window_event_listener(ev::keydown, move |event| {
        if let Some(key) = NavKey::from_key(&event.key()) {
            carousel.update(|c| c.apply_key(key));
        }
    });
    on_cleanup(move || keys.remove());

    view! {
        <SectionWrapper copy=GALLERY_SECTION class="bg-gray-50 dark:bg-gray-950">
            <div class="relative w-full max-w-6xl mx-auto lg:w-3/5 lg:max-w-none">
                <div class="relative aspect-video md:aspect-[16/10] rounded-lg overflow-hidden bg-gray-200 shadow-xl">
                    <MainStage carousel=carousel />

                    <button
                        class=format!("{NAV_BUTTON} left-4")
                        aria-label="Previous image"
                        on:click=move |_| carousel.update(Carousel::go_to_previous)
                    >
                        <Icon path=ICON_CHEVRON_LEFT />
                    </button>
                    <button
                        class=format!("{NAV_BUTTON} right-4")
                        aria-label="Next image"
                        on:click=move |_| carousel.update(Carousel::go_to_next)
                    >
                        <Icon path=ICON_CHEVRON_RIGHT />
                    </button>

                    <div class="absolute bottom-4 left-1/2 -translate-x-1/2 bg-black/50 text-white px-4 py-2 rounded-full text-sm backdrop-blur-sm">
                        {move || carousel.with(Carousel::counter_label)}
                    </div>
                </div>

                <ThumbnailStrip carousel=carousel />
            </div>
        </SectionWrapper>
    }
    .into_any()
}

/// The large image (or its placeholder) for the current slide.
#[component]
fn MainStage(carousel: RwSignal<Carousel>) -> impl IntoView {
    move || {
        let (image, failed) = carousel.with(|c| {
            let image = c.current_image().clone();
            let failed = c.is_failed(image.id);
            (image, failed)
        });

        if failed {
            let caption = image.missing_caption();
            view! {
                <div class="w-full h-full flex items-center justify-center bg-gray-300 text-gray-500">
                    <div class="text-center">
                        <Icon path=ICON_PHOTO class="w-16 h-16 mx-auto mb-2" />
                        <p class="text-sm font-medium">{image.alt}</p>
                        <p class="text-xs mt-1 text-gray-400">{caption}</p>
                    </div>
                </div>
            }
            .into_any()
        } else {
            view! { <SlideImage image=image carousel=carousel class="w-full h-full object-cover" /> }
                .into_any()
        }
    }
}

#[component]
fn ThumbnailStrip(carousel: RwSignal<Carousel>) -> impl IntoView {
    let images = carousel.with_untracked(|c| c.images().to_vec());

    view! {
        <div class="mt-6 flex gap-3 overflow-x-auto pb-2 scrollbar-hide">
            {images
                .into_iter()
                .enumerate()
                .map(|(index, image)| {
                    let id = image.id;
                    let class = move || {
                        format!(
                            "flex-shrink-0 w-24 h-24 md:w-32 md:h-32 rounded-lg overflow-hidden border-2 transition-all duration-200 {}",
                            carousel.with(|c| c.thumbnail_class(index)),
                        )
                    };
                    let jump = move |_| {
                        carousel.update(|c| {
                            if let Err(e) = c.go_to_slide(index) {
                                tracing::warn!(error = %e, "thumbnail jump ignored");
                            }
                        })
                    };
                    view! {
                        <button class=class aria-label=format!("Go to image {}", index + 1) on:click=jump>
                            {move || {
                                if carousel.with(|c| c.is_failed(id)) {
                                    view! {
                                        <div class="w-full h-full flex items-center justify-center bg-gray-200 text-gray-400 text-xs text-center p-1">
                                            <span class="truncate">{image.alt.clone()}</span>
                                        </div>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <SlideImage
                                            image=image.clone()
                                            carousel=carousel
                                            class="w-full h-full object-cover"
                                        />
                                    }
                                    .into_any()
                                }
                            }}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// `<img>` that reports a load failure back to the carousel.
#[component]
fn SlideImage(
    image: GalleryImage,
    carousel: RwSignal<Carousel>,
    class: &'static str,
) -> impl IntoView {
    let id = image.id;
    view! {
        <img
            src=image.src
            alt=image.alt
            class=class
            on:error=move |_| {
                carousel.update(|c| {
                    c.mark_failed(id);
                });
            }
        />
    }
}
