use yew::prelude::*;

struct Download {
    name: &'static str,
    platform: &'static str,
    href: &'static str,
}

const DOWNLOADS: &[Download] = &[
    Download {
        name: "Desktop client",
        platform: "Windows",
        href: "/downloads/portal-windows.zip",
    },
    Download {
        name: "Desktop client",
        platform: "macOS",
        href: "/downloads/portal-macos.dmg",
    },
    Download {
        name: "Desktop client",
        platform: "Linux",
        href: "/downloads/portal-linux.tar.gz",
    },
];

#[function_component(DownloadsPage)]
pub fn downloads_page() -> Html {
    html! {
        <section class="max-w-3xl mx-auto p-8">
            <h1 class="text-3xl font-bold mb-6">{"Downloads"}</h1>
            <div class="grid gap-4 sm:grid-cols-3">
                { for DOWNLOADS.iter().map(|download| html! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{download.platform}</h2>
                            <p class="text-sm opacity-70">{download.name}</p>
                            <div class="card-actions justify-end">
                                <a class="btn btn-sm btn-primary" href={download.href}>{"Download"}</a>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
