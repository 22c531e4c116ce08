//! Inline static assets embedded in the listing document. The client script
//! is an opaque consumer of the HTML/endpoint contract: it collapses
//! folders and fetches `/info` metadata on demand.

pub(crate) const STYLE_SHEET: &str = r"
body {
    font-family: sans-serif;
}

ul {
    list-style: none;
}

ul ul {
    padding-top: 5px;
}

li {
    padding: 5px 0;
}

.type-video {
    color: green;
    cursor: pointer;
}

.folder {
    color: gray;
    cursor: pointer;
}

.num-files {
    font-size: small;
}

.info {
    background-color: lightgray;
    border: 1px solid gray;
    margin-left: 15px;
    padding: 5px;
    font-family: monospace;
}

.header {
    font-weight: bold;
    font-size: large;
    padding-top: 20px;
}
tr:first-child .header {
    padding-top: 0;
}

.title {
    padding-right: 10px;
    position: relative;
}
.title::after {
    content: ':';
    position: absolute;
    right: 0px;
}
";

pub(crate) const CLIENT_SCRIPT: &str = r"
document.addEventListener('DOMContentLoaded', function () {
    document.querySelectorAll('ul ul').forEach(function (list) {
        list.style.display = 'none';
    });

    document.querySelectorAll('.folder').forEach(function (folder) {
        folder.addEventListener('click', function () {
            var list = folder.parentElement.querySelector('ul');
            if (list) {
                list.style.display = list.style.display === 'none' ? '' : 'none';
            }
        });
    });

    document.querySelectorAll('.type-video').forEach(function (video) {
        video.addEventListener('click', function () {
            var info = video.parentElement.querySelector('.info');
            if (info) {
                info.style.display = info.style.display === 'none' ? '' : 'none';
                return;
            }

            info = document.createElement('div');
            info.className = 'info';
            info.textContent = 'Loading...';
            video.parentElement.appendChild(info);

            var body = new URLSearchParams();
            body.set('path', video.dataset.path);
            fetch('/info', { method: 'POST', body: body })
                .then(function (response) { return response.text(); })
                .then(function (text) { renderInfo(info, text); })
                .catch(function () { info.textContent = 'metadata unavailable'; });
        });
    });

    function renderInfo(container, text) {
        container.textContent = '';
        var table = document.createElement('table');
        container.appendChild(table);

        text.split(/\r?\n/).forEach(function (line) {
            line = line.trim();
            if (line.length === 0) {
                return;
            }

            var row = table.insertRow();
            var separator = line.indexOf(':');
            if (separator !== -1) {
                var title = row.insertCell();
                title.className = 'title';
                title.textContent = line.slice(0, separator).trim();
                var value = row.insertCell();
                value.className = 'value';
                value.textContent = line.slice(separator + 1).trim();
            } else {
                var header = row.insertCell();
                header.className = 'header';
                header.colSpan = 2;
                header.textContent = line;
            }
        });
    }
});
";
