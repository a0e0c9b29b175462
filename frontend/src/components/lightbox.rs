use yew::prelude::*;

use crate::config::Project;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub project: Project,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let project = props.project;
    let click = |cb: &Callback<()>| cb.reform(|_: MouseEvent| ());

    html! {
        <div class="lightbox" role="dialog" aria-modal="true" aria-label={project.title}>
            <style>
                {r#"
                    .lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 80;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .lightbox-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.55);
                        backdrop-filter: blur(4px);
                    }
                    .lightbox-panel {
                        position: relative;
                        width: 100%;
                        max-width: 64rem;
                        overflow: hidden;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: rgba(12, 10, 9, 0.35);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                        animation: modalPop 0.22s ease-out;
                    }
                    .lightbox-image {
                        aspect-ratio: 16 / 10;
                        background: #000;
                    }
                    .lightbox-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: contain;
                    }
                    .lightbox-bar {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 1.25rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                    }
                    .lightbox-title { font-size: 0.875rem; font-weight: 600; }
                    .lightbox-hint { font-size: 0.75rem; opacity: 0.7; }
                    .lightbox-controls { display: flex; gap: 0.5rem; }
                    .lightbox-controls button {
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                        padding: 0.5rem 1rem;
                        font-size: 0.75rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .lightbox-controls button.close {
                        background: #fff;
                        color: #0c0a09;
                    }
                    @keyframes modalPop {
                        from { transform: scale(0.97); opacity: 0; }
                        to { transform: scale(1); opacity: 1; }
                    }
                "#}
            </style>
            <div class="lightbox-backdrop" onclick={click(&props.on_close)}></div>
            <div class="lightbox-panel">
                <div class="lightbox-image">
                    <img src={project.img} alt={project.title} />
                </div>
                <div class="lightbox-bar">
                    <div>
                        <p class="lightbox-title">{ project.title }</p>
                        <p class="lightbox-hint">
                            { format!("{} • Click outside to close • Esc works", project.tag) }
                        </p>
                    </div>
                    <div class="lightbox-controls">
                        <button type="button" onclick={click(&props.on_prev)}>{"Prev"}</button>
                        <button type="button" onclick={click(&props.on_next)}>{"Next"}</button>
                        <button type="button" class="close" onclick={click(&props.on_close)}>{"Close"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
